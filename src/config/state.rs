// Application state module
// Shared, read-only after startup

use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    pub shutdown_signal: Arc<Notify>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            shutdown_signal: Arc::new(Notify::new()),
        }
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
