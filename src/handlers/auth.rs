// src/handlers/auth.rs

use std::sync::Arc;

use axum::{Json, extract::{State, rejection::JsonRejection}, response::IntoResponse};
use serde_json::json;

use crate::{
    config::Config,
    error::AppError,
    models::teacher::LoginRequest,
    store::SurveyStore,
    utils::token::is_school_token,
};

pub const MSG_WRONG_CODE: &str = "Código incorrecto";

/// Exchanges an access code for the school token.
///
/// Accepts the school code itself, or any teacher access code on record.
/// Either way the token handed back is the shared school token.
pub async fn login(
    State(store): State<Arc<dyn SurveyStore>>,
    State(config): State<Config>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let codigo = payload.codigo.as_str();

    if is_school_token(&config, codigo) {
        return Ok(Json(json!({
            "success": true,
            "token": config.school_token,
        })));
    }

    if !codigo.is_empty() {
        if let Some(teacher) = store.find_teacher_by_code(codigo).await? {
            tracing::info!("Teacher {} logged in with access code", teacher.id);
            return Ok(Json(json!({
                "success": true,
                "token": config.school_token,
            })));
        }
    }

    Err(AppError::AuthError(MSG_WRONG_CODE.to_string()))
}
