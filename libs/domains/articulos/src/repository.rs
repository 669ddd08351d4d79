use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ArticuloResult;
use crate::models::{Articulo, ArticuloFilter, CreateArticulo, UpdateArticulo};

/// Repository trait for Articulo persistence
///
/// Ids arrive already parsed; rejecting malformed ids is the caller's job so
/// that no storage roundtrip happens for them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticuloRepository: Send + Sync {
    /// Get an articulo by ID
    async fn find_by_id(&self, id: ObjectId) -> ArticuloResult<Option<Articulo>>;

    /// List articulos matching the filter, most recently modified first
    async fn find(&self, filter: ArticuloFilter) -> ArticuloResult<Vec<Articulo>>;

    /// Store a new, active articulo
    async fn insert(&self, input: CreateArticulo) -> ArticuloResult<Articulo>;

    /// Apply the supplied fields and refresh `fechaModificacion`.
    /// Fails with `NotFound` when no articulo has this id.
    async fn update_by_id(&self, id: ObjectId, input: UpdateArticulo) -> ArticuloResult<Articulo>;

    /// Soft delete: same as an update that only sets `estadoActivacion` to false
    async fn deactivate_by_id(&self, id: ObjectId) -> ArticuloResult<Articulo> {
        self.update_by_id(id, UpdateArticulo::deactivate()).await
    }
}
