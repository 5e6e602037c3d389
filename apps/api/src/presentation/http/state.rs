use crate::{application::analyze_image::use_case::AnalyzeImageUseCase, config::Config};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: Arc<AnalyzeImageUseCase>,
}
