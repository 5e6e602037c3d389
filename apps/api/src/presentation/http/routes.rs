use super::{
    handlers::{analyze, docs, health},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    let analyze_routes = Router::new()
        .route("/api/v1/analyze", post(analyze::analyze_upload))
        .route("/api/v1/analyze/json", post(analyze::analyze_json))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.config.max_upload_bytes));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        // Analysis
        .merge(analyze_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
