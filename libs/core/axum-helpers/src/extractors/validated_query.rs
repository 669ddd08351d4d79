//! Query-string extractor that runs a [`ValidateInput`] schema over the parameters.

use super::ValidateInput;
use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Query extractor with schema validation.
///
/// Every parameter arrives as a JSON string (`?estadoActivacion=true` becomes
/// `{"estadoActivacion": "true"}`); coercion to other types is up to the
/// schema.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: ValidateInput,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state).await?;

        let raw: Map<String, Value> = params
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        let data = T::validate_input(&Value::Object(raw))?;
        Ok(ValidatedQuery(data))
    }
}
