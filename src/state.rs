use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::Config;

/// Shared per-process state, cloned into each request handler. Everything in
/// here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        // No request timeout: a hung completion call hangs that request.
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}
