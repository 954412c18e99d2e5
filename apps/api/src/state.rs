use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// The one external capability the engine consumes. Swap the backend
    /// without touching handler or engine code.
    pub generator: Arc<dyn TextGenerator>,
    /// Kept for handlers that need runtime settings; only `main` reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
