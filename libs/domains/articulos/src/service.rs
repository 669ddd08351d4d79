//! Articulo Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ArticuloError, ArticuloResult};
use crate::models::{Articulo, ArticuloFilter, CreateArticulo, UpdateArticulo};
use crate::repository::ArticuloRepository;

/// Articulo service providing business logic operations
///
/// Parses ids and re-checks DTO invariants before any repository call, so a
/// malformed id or invalid input never costs a storage roundtrip.
pub struct ArticuloService<R: ArticuloRepository> {
    repository: Arc<R>,
}

fn parse_id(id: &str) -> ArticuloResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ArticuloError::InvalidId(id.to_string()))
}

impl<R: ArticuloRepository> ArticuloService<R> {
    /// Create a new ArticuloService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List articulos matching the filter, most recently modified first
    #[instrument(skip(self))]
    pub async fn list_articulos(&self, filter: ArticuloFilter) -> ArticuloResult<Vec<Articulo>> {
        self.repository.find(filter).await
    }

    /// Get an articulo by ID
    #[instrument(skip(self))]
    pub async fn get_articulo(&self, id: &str) -> ArticuloResult<Articulo> {
        let oid = parse_id(id)?;
        self.repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| ArticuloError::NotFound(id.to_string()))
    }

    /// Create a new articulo
    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    pub async fn create_articulo(&self, input: CreateArticulo) -> ArticuloResult<Articulo> {
        let input = input.trimmed();
        input.validate()?;
        self.repository.insert(input).await
    }

    /// Update an existing articulo
    #[instrument(skip(self, input))]
    pub async fn update_articulo(&self, id: &str, input: UpdateArticulo) -> ArticuloResult<Articulo> {
        let oid = parse_id(id)?;
        let input = input.trimmed();
        input.validate()?;
        self.repository.update_by_id(oid, input).await
    }

    /// Deactivate an articulo (soft delete). Deactivating twice is not an error.
    #[instrument(skip(self))]
    pub async fn deactivate_articulo(&self, id: &str) -> ArticuloResult<Articulo> {
        let oid = parse_id(id)?;
        self.repository.deactivate_by_id(oid).await
    }
}

impl<R: ArticuloRepository> Clone for ArticuloService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
