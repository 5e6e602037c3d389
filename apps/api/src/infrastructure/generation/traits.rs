use crate::domain::analysis::value_objects::EncodedImage;
use async_trait::async_trait;
use thiserror::Error;

/// Why a generation call did not produce text. Logged, never shown to users.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("API_KEY environment variable is not set")]
    MissingCredential,
    #[error("request to generation endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation endpoint returned {status}: {message}")]
    Remote { status: u16, message: String },
    #[error("generation response unusable: {0}")]
    MalformedResponse(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Send one image part followed by one text part and return the reply text.
    async fn generate(&self, image: &EncodedImage, prompt: &str)
    -> Result<String, GenerationFailure>;

    /// Model identifier requests are sent to.
    fn model(&self) -> String;

    fn has_credential(&self) -> bool;
}
