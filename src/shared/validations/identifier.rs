//! Identifier payload schema

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::coerce::CODE_INVALID_TYPE;
use super::Schema;
use crate::shared::types::ValidationError;

pub const INVALID_ID: &str = "Invalid ID";
pub const CODE_INVALID_UUID: &str = "invalid_uuid";

/// Hyphenated UUID length (8-4-4-4-12).
const HYPHENATED_LEN: usize = 36;

/// Payload carrying a single UUID identifier.
///
/// `id` is kept exactly as received; use [`IdInput::uuid`] for the parsed
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate, ToSchema)]
pub struct IdInput {
    #[validate(custom(function = "validate_uuid"))]
    #[schema(example = "67e55044-10b1-426f-9247-bb680e5fe0c8")]
    pub id: String,
}

impl IdInput {
    /// The parsed identifier, `None` when `id` was set by hand to something
    /// that is not a hyphenated UUID.
    pub fn uuid(&self) -> Option<Uuid> {
        if is_uuid(&self.id) {
            Uuid::parse_str(&self.id).ok()
        } else {
            None
        }
    }
}

impl Schema for IdInput {
    const NAME: &'static str = "identifier";

    fn parse(input: &Value) -> Result<Self, ValidationError> {
        match input.get("id") {
            Some(Value::String(id)) => {
                let candidate = Self { id: id.clone() };
                candidate.validate()?;
                Ok(candidate)
            }
            _ => Err(ValidationError::single("id", CODE_INVALID_TYPE, INVALID_ID)),
        }
    }
}

/// Canonical hyphenated UUID of any version, either case.
pub fn is_uuid(s: &str) -> bool {
    s.len() == HYPHENATED_LEN && Uuid::parse_str(s).is_ok()
}

fn validate_uuid(id: &str) -> Result<(), validator::ValidationError> {
    if is_uuid(id) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new(CODE_INVALID_UUID);
        err.message = Some(INVALID_ID.into());
        Err(err)
    }
}
