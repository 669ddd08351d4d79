//! Application state management.
//!
//! This module defines the shared application state passed to the route builders.
//! The state contains:
//! - Configuration
//! - The lazily connected MongoDB client

use database::mongodb::SharedMongoClient;

/// Shared application state.
///
/// Cloning is cheap: the MongoDB handle shares one cached client.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, connected on first use and reset on shutdown
    pub mongo: SharedMongoClient,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let mongo = SharedMongoClient::new(config.mongodb.clone());
        Self { config, mongo }
    }
}
