//! MongoDB connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;
mod shared;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, connect_from_config};
pub use health::{HealthStatus, check_health_detailed};
pub use shared::SharedMongoClient;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
