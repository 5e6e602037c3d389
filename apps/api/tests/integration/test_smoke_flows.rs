use super::helpers::{StubReply, TEST_API_KEY, read_json, send, spawn_app, spawn_stub};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

#[tokio::test]
async fn health_reports_configured_credential() {
    let stub = spawn_stub(StubReply::Text("unused".to_string())).await;
    let app = spawn_app(Some(TEST_API_KEY), &stub);

    let res = send(&app, get("/health")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["credential"], "configured");
    assert_eq!(body["model"], "gemini-2.5-flash");
    assert_eq!(body["analysis"], "idle");
    assert!(!body.to_string().contains(TEST_API_KEY));
}

#[tokio::test]
async fn health_is_degraded_without_credential() {
    let stub = spawn_stub(StubReply::Text("unused".to_string())).await;
    let app = spawn_app(None, &stub);

    let res = send(&app, get("/health")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["credential"], "missing");
}

#[tokio::test]
async fn docs_list_analyze_routes() {
    let stub = spawn_stub(StubReply::Text("unused".to_string())).await;
    let app = spawn_app(Some(TEST_API_KEY), &stub);

    let res = send(&app, get("/api/v1/docs")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert!(body["paths"]["/api/v1/analyze"]["post"].is_object());
    assert!(body["paths"]["/api/v1/analyze/json"]["post"].is_object());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let stub = spawn_stub(StubReply::Text("unused".to_string())).await;
    let app = spawn_app(Some(TEST_API_KEY), &stub);

    let res = send(&app, get("/health")).await;
    assert!(res.headers().contains_key("x-request-id"));

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(&app, req).await;
    assert_eq!(
        res.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-me-123")
    );
}
