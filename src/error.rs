// src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

pub const MSG_CONNECTION: &str = "Error de conexión";
pub const MSG_SERVER: &str = "Error del servidor";
pub const MSG_INVALID_TOKEN: &str = "Token inválido";

/// Global Application Error Enum.
/// Every variant renders as the `{success: false, message}` envelope.
#[derive(Debug)]
pub enum AppError {
    // 503 Service Unavailable, storage unreachable
    ConnectionError(String),

    // 500 Internal Server Error. `message` goes to the caller, `cause` only to the log.
    QueryError { message: &'static str, cause: String },

    // 401 Unauthorized
    AuthError(String),

    // 400 Bad Request
    BadRequest(String),
}

impl AppError {
    pub fn query(cause: impl Into<String>) -> Self {
        AppError::QueryError {
            message: MSG_SERVER,
            cause: cause.into(),
        }
    }

    /// Replaces the caller-facing message of a query error.
    /// Connection errors keep their own message.
    pub fn with_message(self, message: &'static str) -> Self {
        match self {
            AppError::QueryError { cause, .. } => AppError::QueryError { message, cause },
            other => other,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ConnectionError(cause) => {
                tracing::error!("Database connection error: {}", cause);
                (StatusCode::SERVICE_UNAVAILABLE, MSG_CONNECTION.to_string())
            }
            AppError::QueryError { message, cause } => {
                tracing::error!("Query error: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Transport failures count as connection errors, everything else as a query error.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AppError::ConnectionError(err.to_string()),
            _ => AppError::query(err.to_string()),
        }
    }
}

/// A stored payload that fails to decode.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::query(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
