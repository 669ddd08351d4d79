use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use core_config::{ConfigError, FromEnv, env_required_non_empty};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Message returned when the key is missing or does not match
pub const UNAUTHORIZED_MESSAGE: &str = "API Key incorrecta o no introducida.";

/// The configured shared secret
#[derive(Clone)]
pub struct ApiKeyConfig {
    secret: String,
}

impl ApiKeyConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Exact comparison against the configured secret
    pub fn matches(&self, candidate: &str) -> bool {
        candidate == self.secret
    }
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Environment variables:
/// - `API_KEY` (required, non-empty)
impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_required_non_empty("API_KEY")?))
    }
}

fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok())
}

/// API key middleware
///
/// Rejects the request with 401 before it reaches any handler unless the
/// `x-api-key` header equals the configured secret.
///
/// # Example
///
/// ```ignore
/// let protected = Router::new()
///     .route("/articulos", get(handler))
///     .layer(axum::middleware::from_fn_with_state(api_key, api_key_middleware));
/// ```
pub async fn api_key_middleware(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match extract_api_key(request.headers()).map(|key| config.matches(key)) {
        Some(true) => Ok(next.run(request).await),
        Some(false) => {
            tracing::debug!(path = %request.uri().path(), "Incorrect API key");
            Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))
        }
        None => {
            tracing::debug!(path = %request.uri().path(), "No API key provided");
            Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))
        }
    }
}
