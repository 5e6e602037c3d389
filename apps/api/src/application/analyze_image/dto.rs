use bytes::Bytes;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Image as received by the HTTP layer, before encoding.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Upload {
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Bytes,
    },
    DataUrl {
        value: String,
        declared_type: Option<String>,
    },
    /// The upload could not be read; `reason` is the host error text.
    Unreadable { reason: String },
}

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalyzeJsonRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyzeImageResponse {
    pub state: String,
    pub analysis: String,
    pub model: String,
}

impl AnalyzeImageResponse {
    pub fn new(analysis: String, model: String) -> Self {
        Self {
            state: "result".to_string(),
            analysis,
            model,
        }
    }
}
