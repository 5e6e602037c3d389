use crate::{
    application::analyze_image::dto::{AnalyzeImageResponse, AnalyzeJsonRequest, ImageSource},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, State, rejection::JsonRejection},
    http::StatusCode,
};

/// Multipart form: `image` (file part) and `prompt` (text part).
pub async fn analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeImageResponse>, AppError> {
    let mut image = None;
    let mut prompt = String::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or("") {
            "image" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                image = match field.bytes().await {
                    // Browsers send an empty part when no file was picked.
                    Ok(bytes) if bytes.is_empty() => None,
                    Ok(bytes) => Some(ImageSource::Upload {
                        file_name,
                        content_type,
                        bytes,
                    }),
                    Err(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                        return Err(err.into());
                    }
                    Err(err) => Some(ImageSource::Unreadable {
                        reason: err.body_text(),
                    }),
                };
            }
            "prompt" => prompt = field.text().await?,
            _ => {}
        }
    }

    let response = state.analyzer.execute(image, &prompt).await?;
    Ok(Json(response))
}

/// JSON body carrying the image as a data URL or bare base64.
pub async fn analyze_json(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeJsonRequest>, JsonRejection>,
) -> Result<Json<AnalyzeImageResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    })?;

    let image = request
        .image
        .filter(|value| !value.trim().is_empty())
        .map(|value| ImageSource::DataUrl {
            value,
            declared_type: request.mime_type,
        });

    let response = state.analyzer.execute(image, &request.prompt).await?;
    Ok(Json(response))
}
