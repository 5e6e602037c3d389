use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    credential: &'static str,
    model: String,
    analysis: &'static str,
    version: &'static str,
    checked_at: DateTime<Utc>,
}

/// Process liveness plus whether analyses can currently succeed.
///
/// A missing credential reports `degraded` but keeps 200: the process is up,
/// only analysis calls will fail. `analysis` is the shared session state, so
/// `loading` means a new analysis would be refused as busy.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let client = state.analyzer.client();
    let (status, credential) = if client.has_credential() {
        ("healthy", "configured")
    } else {
        tracing::warn!("Health check: generation credential is not configured");
        ("degraded", "missing")
    };

    Json(HealthResponse {
        status,
        credential,
        model: client.model(),
        analysis: state.analyzer.state().name(),
        version: env!("CARGO_PKG_VERSION"),
        checked_at: Utc::now(),
    })
}
