use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gateway backend behind the `ChatCompletion` seam — the HTTP client
    /// in production, scripted stubs in tests.
    pub llm: Arc<dyn ChatCompletion>,
    pub config: Config,
}
