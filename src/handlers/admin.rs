// src/handlers/admin.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::teacher::{AddTeacherRequest, NewTeacher},
    store::SurveyStore,
    utils::code::generate_access_code,
};

pub const MSG_TEACHER_FAILED: &str = "Error agregando profesor";

/// Registers a teacher and returns the generated access code.
/// Admin only.
///
/// The response is the only place the code is ever shown. Neither the code
/// nor the email is checked for duplicates.
pub async fn add_teacher(
    State(store): State<Arc<dyn SurveyStore>>,
    payload: Result<Json<AddTeacherRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let teacher = NewTeacher {
        nombre: payload.nombre.trim().to_string(),
        email: payload.email.trim().to_string(),
        codigo_acceso: generate_access_code(),
    };

    let id = store
        .insert_teacher(&teacher)
        .await
        .map_err(|e| e.with_message(MSG_TEACHER_FAILED))?;

    tracing::info!("Teacher {} added", id);

    Ok(Json(serde_json::json!({
        "success": true,
        "codigo": teacher.codigo_acceso,
        "message": format!("Profesor agregado con código: {}", teacher.codigo_acceso),
    })))
}
