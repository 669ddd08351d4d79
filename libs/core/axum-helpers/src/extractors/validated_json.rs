//! JSON extractor that runs a [`ValidateInput`] schema over the request body.

use super::ValidateInput;
use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde_json::Value;

/// JSON extractor with schema validation.
///
/// The body must be well-formed JSON with a JSON content type (400/415
/// otherwise); the parsed value is then validated by `T::validate_input`,
/// failing with a 400 that lists every field error.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateArticulo>) -> String {
///     format!("Creating: {}", input.nombre)
/// }
///
/// let app = Router::new().route("/articulos", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: ValidateInput,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state).await?;
        let data = T::validate_input(&raw)?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{self, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use std::borrow::Cow;
    use tower::ServiceExt;
    use validator::{ValidationError, ValidationErrors};

    struct Nombre(String);

    impl ValidateInput for Nombre {
        fn validate_input(input: &Value) -> Result<Self, ValidationErrors> {
            match input.get("nombre").and_then(Value::as_str) {
                Some(n) if !n.is_empty() => Ok(Nombre(n.to_string())),
                _ => {
                    let mut errors = ValidationErrors::new();
                    errors.add(
                        "nombre",
                        ValidationError::new("required")
                            .with_message(Cow::Borrowed("El nombre es obligatorio")),
                    );
                    Err(errors)
                }
            }
        }
    }

    async fn echo(ValidatedJson(n): ValidatedJson<Nombre>) -> String {
        n.0
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    fn json_request(body: &str) -> Request {
        http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_reaches_handler() {
        let response = app().oneshot(json_request(r#"{"nombre":"Celular"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Celular");
    }

    #[tokio::test]
    async fn test_schema_failure_is_validation_error() {
        let response = app().oneshot(json_request(r#"{"marca":"Apple"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["nombre"][0]["message"], "El nombre es obligatorio");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = app().oneshot(json_request("{nombre:")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "JSON_EXTRACTION");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"nombre":"Celular"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
