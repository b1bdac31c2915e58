//! Validated path-parameter extractor for Axum

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::SchemaRejection;
use crate::shared::utils::string_map;
use crate::shared::validations::Schema;

/// Extracts the matched path parameters and validates them as `T`.
///
/// The route's parameter names must match the schema's fields, e.g.
/// `/items/{id}` for [`IdInput`](crate::shared::validations::IdInput).
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: Schema,
    S: Send + Sync,
{
    type Rejection = SchemaRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(SchemaRejection::Path)?;

        let value = T::check(&string_map(params))?;

        Ok(ValidatedPath(value))
    }
}
