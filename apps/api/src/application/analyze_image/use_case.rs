use crate::{
    application::analyze_image::{
        analysis_client::AnalysisClient,
        dto::{AnalyzeImageResponse, ImageSource},
    },
    domain::analysis::{
        errors::AnalyzerError,
        session::{AnalysisSession, AnalysisState},
        value_objects::EncodedImage,
    },
    infrastructure::encoding::image_encoder::ImageEncoder,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, instrument, warn};

/// Validate, encode, then analyze: the whole "Start Analysis" flow.
///
/// One [`AnalysisSession`] is shared by every caller, so its `Loading` state is
/// the service-wide busy flag: a request arriving while another analysis is in
/// flight gets [`AnalyzerError::Busy`]. Encoding finishes before the generation
/// call starts, and nothing is sent when validation fails.
pub struct AnalyzeImageUseCase {
    client: AnalysisClient,
    session: Mutex<AnalysisSession>,
}

impl AnalyzeImageUseCase {
    pub fn new(client: AnalysisClient) -> Self {
        info!(model = %client.model(), "Initializing AnalyzeImageUseCase");
        Self {
            client,
            session: Mutex::new(AnalysisSession::new()),
        }
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    /// Snapshot of what the last (or current) analysis looks like.
    pub fn state(&self) -> AnalysisState {
        lock(&self.session).state().clone()
    }

    #[instrument(skip(self, image, prompt), fields(
        has_image = image.is_some(),
        prompt_chars = prompt.chars().count()
    ))]
    pub async fn execute(
        &self,
        image: Option<ImageSource>,
        prompt: &str,
    ) -> Result<AnalyzeImageResponse, AnalyzerError> {
        lock(&self.session).begin(image.is_some(), prompt)?;
        let in_flight = InFlight::new(&self.session);
        let Some(source) = image else {
            return Err(AnalyzerError::Validation);
        };

        let outcome = match Self::encode(&source) {
            Ok(encoded) => self.client.analyze(&encoded, prompt).await,
            Err(err) => {
                warn!(error = %err, "image could not be encoded");
                Err(err)
            }
        };

        in_flight
            .settle(outcome)
            .map(|text| AnalyzeImageResponse::new(text, self.client.model()))
    }

    fn encode(source: &ImageSource) -> Result<EncodedImage, AnalyzerError> {
        match source {
            ImageSource::Upload {
                file_name,
                content_type,
                bytes,
            } => ImageEncoder::encode_bytes(bytes, content_type.as_deref(), file_name.as_deref()),
            ImageSource::DataUrl {
                value,
                declared_type,
            } => ImageEncoder::encode_data_url(value, declared_type.as_deref()),
            ImageSource::Unreadable { reason } => Err(AnalyzerError::Encode(reason.clone())),
        }
    }
}

/// Poisoning is ignored: every session transition is a single assignment.
fn lock(session: &Mutex<AnalysisSession>) -> MutexGuard<'_, AnalysisSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps the shared session in `Loading` until the outcome is recorded.
///
/// Dropped without [`settle`](Self::settle) (the request future was cancelled,
/// e.g. the client went away) it resets the session to `Idle`.
struct InFlight<'a> {
    session: &'a Mutex<AnalysisSession>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(session: &'a Mutex<AnalysisSession>) -> Self {
        Self {
            session,
            settled: false,
        }
    }

    fn settle(mut self, outcome: Result<String, AnalyzerError>) -> Result<String, AnalyzerError> {
        self.settled = true;
        lock(self.session).finish(outcome.clone());
        outcome
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("analysis abandoned before finishing; session reset");
            lock(self.session).reset();
        }
    }
}
