use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ArticuloError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid articulo id: {0}")]
    InvalidId(String),

    #[error("Articulo not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ArticuloResult<T> = Result<T, ArticuloError>;

/// Convert ArticuloError to AppError for standardized error responses
impl From<ArticuloError> for AppError {
    fn from(err: ArticuloError) -> Self {
        match err {
            ArticuloError::Validation(errors) => AppError::ValidationError(errors),
            ArticuloError::InvalidId(id) => {
                AppError::InvalidId(format!("ID de articulo no válido: {}", id))
            }
            ArticuloError::NotFound(_) => AppError::NotFound("Articulo no encontrado".to_string()),
            ArticuloError::Database(msg) => AppError::InternalServerError(msg),
            ArticuloError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ArticuloError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ArticuloError {
    fn from(err: mongodb::error::Error) -> Self {
        ArticuloError::Database(err.to_string())
    }
}

impl From<MongoError> for ArticuloError {
    fn from(err: MongoError) -> Self {
        ArticuloError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ArticuloError::Validation(ValidationErrors::new()), StatusCode::BAD_REQUEST),
            (ArticuloError::InvalidId("xyz".into()), StatusCode::BAD_REQUEST),
            (ArticuloError::NotFound("665f1c2e8b3e4a2d9c0f1a2b".into()), StatusCode::NOT_FOUND),
            (ArticuloError::Database("timeout".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ArticuloError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_connection_failure_maps_to_database() {
        let err: ArticuloError = MongoError::ConnectionFailed("no servers".into()).into();
        assert!(matches!(err, ArticuloError::Database(_)));
    }
}
