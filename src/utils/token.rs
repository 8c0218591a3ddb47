// src/utils/token.rs

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::{
    config::Config,
    error::{AppError, MSG_INVALID_TOKEN},
    utils::hash::verify_secret,
};

pub const MSG_UNAUTHORIZED: &str = "No autorizado";

/// Extracts the token from `Authorization: Bearer <token>`.
/// A missing header, or one without the `Bearer ` prefix, yields an empty token.
pub fn bearer_token(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("")
}

/// Exact-match check against the shared school token. Empty never matches.
pub fn is_school_token(config: &Config, token: &str) -> bool {
    !token.is_empty() && token == config.school_token
}

/// Axum Middleware: school token gate.
///
/// Runs before the handler, so a rejected request never reaches storage.
pub async fn school_token_middleware(
    State(config): State<Config>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !is_school_token(&config, bearer_token(req.headers())) {
        tracing::warn!("Rejected request to {} with invalid token", req.uri().path());
        return Err(AppError::AuthError(MSG_INVALID_TOKEN.to_string()));
    }

    Ok(next.run(req).await)
}

/// Axum Middleware: administrative key gate.
///
/// Verifies the bearer key against `ADMIN_KEY_HASH`. Without a configured hash
/// every request is rejected.
pub async fn admin_middleware(
    State(config): State<Config>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(hash) = config.admin_key_hash.as_deref() else {
        tracing::warn!("Admin request rejected: ADMIN_KEY_HASH is not configured");
        return Err(AppError::AuthError(MSG_UNAUTHORIZED.to_string()));
    };

    let key = bearer_token(req.headers());
    if key.is_empty() || !verify_secret(key, hash)? {
        tracing::warn!("Admin request rejected: bad credential");
        return Err(AppError::AuthError(MSG_UNAUTHORIZED.to_string()));
    }

    Ok(next.run(req).await)
}
