//! Articulos API routes
//!
//! This module wires up the articulos domain to HTTP routes.

use axum::Router;
use domain_articulos::{ArticuloService, MongoArticuloRepository, handlers};

use crate::state::AppState;

/// Create the articulos router backed by MongoDB
pub fn router(state: &AppState) -> Router {
    let repository = MongoArticuloRepository::new(state.mongo.clone());
    let service = ArticuloService::new(repository);

    handlers::router(service)
}
