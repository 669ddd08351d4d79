//! Articulos Domain
//!
//! CRUD with soft delete for articulo records stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, OpenAPI doc
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Validation  │  ← untyped JSON → typed DTOs (run by the extractors)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← id parsing, invariant re-checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::mongodb::{MongoConfig, SharedMongoClient};
//! use domain_articulos::{ArticuloService, MongoArticuloRepository, handlers};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SharedMongoClient::new(MongoConfig::new("mongodb://localhost:27017"));
//!
//! let repository = MongoArticuloRepository::new(client);
//! repository.init_indexes().await?;
//! let service = ArticuloService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use crate::mongodb::{ArticuloDocument, MongoArticuloRepository};
pub use error::{ArticuloError, ArticuloResult};
pub use handlers::ApiDoc;
pub use models::{
    Articulo, ArticuloFilter, CreateArticulo, DesactivacionResponse, UpdateArticulo,
};
pub use repository::ArticuloRepository;
pub use service::ArticuloService;
pub use validation::{validate_create, validate_filter, validate_update};
