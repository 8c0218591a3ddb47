// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};

use crate::{
    handlers::{admin, auth, pages, survey},
    state::AppState,
    utils::token::{admin_middleware, school_token_middleware},
};

/// Assembles the main application router.
///
/// * Pages: login (`/`) and questionnaire (`/cuestionario`).
/// * `/api`: login is open, questions and answers sit behind the school token.
/// * `/admin`: behind the administrative key.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/login", post(auth::login))
        // Protected survey routes
        .merge(
            Router::new()
                .route("/preguntas", get(survey::list_questions))
                .route("/respuestas", post(survey::submit_answers))
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    school_token_middleware,
                )),
        );

    let admin_routes = Router::new()
        .route("/agregar_profesor", post(admin::add_teacher))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware));

    let questionnaire = ServeFile::new(state.config.static_dir.join("cuestionario.html"));

    Router::new()
        .route("/", get(pages::index))
        .route_service("/cuestionario", questionnaire)
        .nest("/api", api_routes)
        .nest("/admin", admin_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
