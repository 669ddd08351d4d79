//! API routes module
//!
//! This module defines all HTTP API routes for the articulos API.

pub mod articulos;
pub mod health;

use axum::{Router, middleware};
use axum_helpers::api_key_middleware;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
///
/// Only the articulo routes sit behind the API key; docs and probes stay open.
pub fn routes(state: &AppState) -> Router {
    let articulos = articulos::router(state).layer(middleware::from_fn_with_state(
        state.config.api_key.clone(),
        api_key_middleware,
    ));

    Router::new().nest("/articulos", articulos)
}
