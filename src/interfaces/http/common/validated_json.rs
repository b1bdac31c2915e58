//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` reads the body as untyped JSON and runs it through the
//! [`Schema`] `T`, so coercion and defaults apply exactly as they do for any
//! other input source. Malformed JSON is a 400, failed validation a 422 with
//! field-level details.

use axum::extract::FromRequest;
use axum::Json;
use serde_json::Value;

use super::SchemaRejection;
use crate::shared::validations::Schema;

/// An extractor that deserializes a JSON body and validates it.
///
/// # Usage
///
/// ```ignore
/// use input_validator::{IdInput, interfaces::http::common::ValidatedJson};
///
/// async fn handler(ValidatedJson(body): ValidatedJson<IdInput>) {
///     // `body.id` is a well-formed UUID
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: Schema,
    S: Send + Sync,
{
    type Rejection = SchemaRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(SchemaRejection::Json)?;

        let value = T::check(&value)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
