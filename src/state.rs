//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::{AppConfig, InvalidBodyPolicy};

/// Read-only state built once at startup and cloned into each handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn invalid_body_policy(&self) -> InvalidBodyPolicy {
        self.config.echo.invalid_body
    }
}
