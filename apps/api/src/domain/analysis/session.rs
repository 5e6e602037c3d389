use super::{errors::AnalyzerError, value_objects::prompt_is_present};

/// What a user of the analyzer currently sees.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading,
    Result(String),
    Error(AnalyzerError),
}

impl AnalysisState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Result(_) => "result",
            Self::Error(_) => "error",
        }
    }
}

/// One user's view of the analyze flow: `Idle -> Loading -> {Result | Error}`.
///
/// `Loading` doubles as the busy flag: a second `begin` while a request is in
/// flight is refused and leaves the state alone.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    state: AnalysisState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, AnalysisState::Loading)
    }

    /// Enter `Loading` if both inputs are present.
    ///
    /// Missing inputs move the session to `Error(Validation)` before any I/O.
    pub fn begin(&mut self, has_image: bool, prompt: &str) -> Result<(), AnalyzerError> {
        if self.is_busy() {
            return Err(AnalyzerError::Busy);
        }
        if !has_image || !prompt_is_present(prompt) {
            self.state = AnalysisState::Error(AnalyzerError::Validation);
            return Err(AnalyzerError::Validation);
        }
        self.state = AnalysisState::Loading;
        Ok(())
    }

    /// Settle an in-flight analysis. Outside `Loading` the outcome is dropped.
    pub fn finish(&mut self, outcome: Result<String, AnalyzerError>) -> &AnalysisState {
        if !self.is_busy() {
            tracing::warn!(state = ?self.state, "analysis outcome arrived with nothing in flight");
            return &self.state;
        }
        self.state = match outcome {
            Ok(text) => AnalysisState::Result(text),
            Err(err) => AnalysisState::Error(err),
        };
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = AnalysisState::Idle;
    }
}
