use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

pub const VALIDATION_MESSAGE: &str = "Please provide an image and a prompt.";
pub const ENCODE_FALLBACK_MESSAGE: &str =
    "Couldn't process the selected file. Please try a different image.";
pub const ANALYSIS_MESSAGE: &str = "Sorry, I couldn't get a response from the AI. There might be an issue with the connection or API key.";
pub const BUSY_MESSAGE: &str = "An analysis is already in progress.";

/// Every failure a caller of the analyzer can observe.
///
/// Callers branch on [`AnalyzerError::kind`]
/// and show the [`Display`](std::fmt::Display) text as-is. Internal causes of an
/// `Analysis` failure are logged where they happen and never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AnalyzerError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    #[error("{0}")]
    Encode(String),
    #[error("{}", ANALYSIS_MESSAGE)]
    Analysis,
    #[error("{}", BUSY_MESSAGE)]
    Busy,
}

impl AnalyzerError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Encode(_) => "encode",
            Self::Analysis => "analysis",
            Self::Busy => "busy",
        }
    }

    /// Encode failure with the fixed user-facing text.
    pub fn unprocessable_file() -> Self {
        Self::Encode(ENCODE_FALLBACK_MESSAGE.to_string())
    }
}
