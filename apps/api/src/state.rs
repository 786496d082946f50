use std::sync::Arc;

use crate::ai::SuggestionProvider;
use crate::config::Config;
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both trait objects are fixed at startup: one storage backend,
/// one AI provider per process.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub ai: Arc<dyn SuggestionProvider>,
    #[allow(dead_code)]
    pub config: Config,
}
