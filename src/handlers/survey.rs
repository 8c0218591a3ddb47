// src/handlers/survey.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    models::{answer::SubmitAnswersRequest, question::Question},
    store::SurveyStore,
    utils::token::bearer_token,
};

pub const MSG_ANSWERS_SAVED: &str = "Respuestas guardadas correctamente";
pub const MSG_ANSWERS_FAILED: &str = "Error guardando respuestas";

/// Lists the active questions in display order.
///
/// The token gate runs as middleware. A single malformed `opciones` payload
/// fails the whole request.
pub async fn list_questions(
    State(store): State<Arc<dyn SurveyStore>>,
) -> Result<impl IntoResponse, AppError> {
    let rows = store.active_questions().await?;

    let preguntas = rows
        .into_iter()
        .map(Question::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::from)?;

    Ok(Json(json!({
        "success": true,
        "preguntas": preguntas,
    })))
}

/// Stores one answer row per submitted question, tied to the token.
///
/// All rows are written in one transaction. Failures never say which entry
/// caused them.
pub async fn submit_answers(
    State(store): State<Arc<dyn SurveyStore>>,
    headers: HeaderMap,
    payload: Result<Json<SubmitAnswersRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let colegio = bearer_token(&headers);

    let answers = payload.into_answers().ok_or_else(|| {
        tracing::warn!("Answer submission with a non-numeric question id");
        AppError::BadRequest(MSG_ANSWERS_FAILED.to_string())
    })?;

    let written = store
        .save_answers(colegio, &answers)
        .await
        .map_err(|e| e.with_message(MSG_ANSWERS_FAILED))?;

    tracing::info!("Saved {} answers", written);

    Ok(Json(json!({
        "success": true,
        "message": MSG_ANSWERS_SAVED,
    })))
}
