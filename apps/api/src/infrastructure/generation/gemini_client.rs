use super::{
    traits::{GenerationFailure, GenerationService},
    wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse},
};
use crate::{config::ApiKey, domain::analysis::value_objects::EncodedImage};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` endpoint.
///
/// The HTTP connection pool is shared between calls. The credential is looked at
/// on every call, so a missing key only fails the request that needed it.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<ApiKey>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<ApiKey>,
        model: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn remote_failure(res: reqwest::Response) -> GenerationFailure {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => match envelope.error.status {
                Some(code) => format!("{} ({})", envelope.error.message, code),
                None => envelope.error.message,
            },
            Err(_) => body,
        };
        GenerationFailure::Remote { status, message }
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    #[instrument(skip_all, fields(model = %self.model, mime_type = %image.mime_type))]
    async fn generate(
        &self,
        image: &EncodedImage,
        prompt: &str,
    ) -> Result<String, GenerationFailure> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(GenerationFailure::MissingCredential)?;

        let res = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose())
            .json(&GenerateContentRequest::image_with_prompt(image, prompt))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(Self::remote_failure(res).await);
        }

        let body: GenerateContentResponse = res
            .json()
            .await
            .map_err(|e| GenerationFailure::MalformedResponse(e.to_string()))?;

        if let Some(reason) = body.block_reason() {
            warn!(block_reason = reason, "prompt blocked by generation endpoint");
            return Err(GenerationFailure::MalformedResponse(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        match body.text() {
            Some(text) => {
                debug!(chars = text.len(), "generation succeeded");
                Ok(text)
            }
            None => {
                let finish_reason = body
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.clone())
                    .unwrap_or_else(|| "none".to_string());
                Err(GenerationFailure::MalformedResponse(format!(
                    "no text in response (finish reason: {})",
                    finish_reason
                )))
            }
        }
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
