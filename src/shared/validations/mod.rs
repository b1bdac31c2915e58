//! Input schemas
//!
//! Each schema turns untyped input into a typed value or a
//! [`ValidationError`] listing every offending field. Schemas are pure and
//! hold no state, so they can be called concurrently without coordination.

pub mod coerce;
pub mod identifier;
pub mod pagination;

pub use identifier::{is_uuid, IdInput, INVALID_ID};
pub use pagination::{PaginationInput, PaginationRules, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};

use serde_json::Value;
use tracing::{debug, trace};

use crate::shared::types::{InputError, ValidationError};
use crate::shared::utils::query_params;

/// A named input shape.
pub trait Schema: Sized {
    /// Name used in log events.
    const NAME: &'static str;

    /// Validate an untyped mapping.
    fn parse(input: &Value) -> Result<Self, ValidationError>;

    /// [`Schema::parse`] with a log event for the outcome.
    fn check(input: &Value) -> Result<Self, ValidationError> {
        let result = Self::parse(input);
        log_outcome(Self::NAME, &result);
        result
    }

    /// Validate a JSON document.
    fn parse_json(raw: &str) -> Result<Self, InputError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::check(&value)?)
    }

    /// Validate a URL query string (`page=2&limit=10`). Every value arrives
    /// as a string.
    fn parse_query(query: &str) -> Result<Self, InputError> {
        let value = query_params(query)?;
        Ok(Self::check(&value)?)
    }
}

pub(crate) fn log_outcome<T>(schema: &'static str, result: &Result<T, ValidationError>) {
    match result {
        Ok(_) => trace!(schema, "input accepted"),
        Err(err) => debug!(
            schema,
            issues = err.issues().len(),
            error = %err,
            "input rejected"
        ),
    }
}
