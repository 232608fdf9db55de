use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::VisionModel;
use crate::rubric::Rubric;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub rubric: Arc<Rubric>,
    /// Pluggable vision backend. Default: GeminiClient.
    pub model: Arc<dyn VisionModel>,
    pub config: Config,
}
