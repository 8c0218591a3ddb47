// tests/router_tests.rs
//
// Drives the router in-process, so headers reach the handlers byte for byte.

mod common;

use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{MemoryStore, SCHOOL_TOKEN, question, test_config};
use cuestionario::{routes, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(store: Arc<MemoryStore>) -> axum::Router {
    routes::create_router(AppState {
        store,
        config: test_config(None),
    })
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn list_questions(authorization: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/preguntas")
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn exact_bearer_token_lists_questions() {
    let store = Arc::new(MemoryStore::with_questions(vec![question(1, 1, true, None)]));

    let response = app(store.clone())
        .oneshot(list_questions(&format!("Bearer {}", SCHOOL_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn padded_bearer_token_is_rejected() {
    let store = Arc::new(MemoryStore::with_questions(vec![question(1, 1, true, None)]));

    for authorization in [
        format!("Bearer {} ", SCHOOL_TOKEN),
        format!("Bearer  {}", SCHOOL_TOKEN),
        format!("Bearer {}\t", SCHOOL_TOKEN),
    ] {
        let response = app(store.clone())
            .oneshot(list_questions(&authorization))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{:?}", authorization);
        let body = json_body(response).await;
        assert_eq!(body, json!({ "success": false, "message": "Token inválido" }));
    }

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn padded_login_code_is_rejected() {
    let store = Arc::new(MemoryStore::default());

    for codigo in [" colegio2025", "colegio2025 ", "  colegio2025\n"] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "codigo": codigo }).to_string()))
            .unwrap();

        let response = app(store.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{:?}", codigo);
        let body = json_body(response).await;
        assert_eq!(body, json!({ "success": false, "message": "Código incorrecto" }));
    }
}
