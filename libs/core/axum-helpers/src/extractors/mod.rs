//! Custom extractors for Axum handlers.
//!
//! Both extractors read the raw input as untyped JSON and hand it to a
//! [`ValidateInput`] implementation, so a handler only ever sees a fully
//! validated, strongly typed value.

pub mod validated_json;
pub mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;

use serde_json::Value;
use validator::ValidationErrors;

/// Parse-and-validate step from untyped input to a typed value.
///
/// Implementations reject anything that does not fully satisfy their schema,
/// reporting every offending field at once.
pub trait ValidateInput: Sized {
    fn validate_input(input: &Value) -> Result<Self, ValidationErrors>;
}
