use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Image Analyzer API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check (reports whether the generation credential is configured)" } },
            "/api/v1/analyze": { "post": { "summary": "Analyze an image: multipart form with `image` file and `prompt` text" } },
            "/api/v1/analyze/json": { "post": { "summary": "Analyze an image: JSON with `image` (data URL or base64), optional `mimeType`, and `prompt`" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
