pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod video_id;

use std::sync::Arc;
use config::Config;
use reqwest::Client;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pooled client for upstream calls.
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: Client::new(),
        }
    }
}
