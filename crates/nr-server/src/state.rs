//! Application state shared across all handlers.

use nr_core::NarrationConfig;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NarrationConfig>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: NarrationConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NarrationConfig::default())
    }
}
