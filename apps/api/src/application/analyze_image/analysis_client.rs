use crate::{
    domain::analysis::{errors::AnalyzerError, value_objects::EncodedImage},
    infrastructure::generation::traits::GenerationService,
};
use std::sync::Arc;
use tracing::error;

/// Sends one image and one prompt to the generation service.
///
/// Whatever goes wrong underneath, callers get [`AnalyzerError::Analysis`];
/// the real cause only reaches the log.
#[derive(Clone)]
pub struct AnalysisClient {
    generator: Arc<dyn GenerationService>,
}

impl AnalysisClient {
    pub fn new(generator: Arc<dyn GenerationService>) -> Self {
        Self { generator }
    }

    /// The prompt is not re-validated; a blank one is forwarded as-is.
    pub async fn analyze(&self, image: &EncodedImage, prompt: &str) -> Result<String, AnalyzerError> {
        self.generator.generate(image, prompt).await.map_err(|cause| {
            error!(error = %cause, "Error analyzing image with AI model");
            AnalyzerError::Analysis
        })
    }

    pub fn model(&self) -> String {
        self.generator.model()
    }

    pub fn has_credential(&self) -> bool {
        self.generator.has_credential()
    }
}
