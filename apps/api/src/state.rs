use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable after startup; shared with blocking extraction tasks.
    pub extractor: Arc<ResumeExtractor>,
    pub config: Config,
}
