//! Database connectors for the articulos service
//!
//! Wraps the MongoDB driver with configuration loading, connection
//! verification, health checks and a process-wide lazily-initialized client.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, SharedMongoClient};
//!
//! let shared = SharedMongoClient::new(MongoConfig::with_database(
//!     "mongodb://localhost:27017",
//!     "gestion_articulos_test",
//! ));
//!
//! // The first call connects; concurrent callers await the same attempt.
//! let db = shared.database().await?;
//! let collection = db.collection::<Document>("articulos");
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
