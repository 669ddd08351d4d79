//! Shared-secret access control.
//!
//! A single API key, configured once per process, gates the protected
//! routes. Callers present it in the `x-api-key` header.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, api_key_middleware};
//! use core_config::FromEnv;
//!
//! let api_key = ApiKeyConfig::from_env()?;
//! let protected = Router::new()
//!     .route("/articulos", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(api_key, api_key_middleware));
//! ```

pub mod api_key;

pub use api_key::{API_KEY_HEADER, ApiKeyConfig, UNAUTHORIZED_MESSAGE, api_key_middleware};
