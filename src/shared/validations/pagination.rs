//! Pagination query schema

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

use super::coerce::{NumberRule, CODE_INVALID_TYPE};
use super::{log_outcome, Schema};
use crate::shared::types::ValidationError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Validated pagination parameters.
///
/// Built from untyped input with [`Schema::parse`]: `page` and `limit` may
/// arrive as strings or numbers and are coerced before being checked.
/// [`Validate::validate`] on a typed value applies the same rules and
/// reports the same codes and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationInput {
    /// Page number, starting at 1
    #[schema(minimum = 1, default = 1)]
    #[param(minimum = 1, default = 1)]
    pub page: u64,
    /// Items per page (1–100)
    #[schema(minimum = 1, maximum = 100, default = 20)]
    #[param(minimum = 1, maximum = 100, default = 20)]
    pub limit: u32,
}

impl PaginationInput {
    /// Parse with rules other than the fixed schema values (e.g. from config).
    pub fn parse_with(input: &Value, rules: &PaginationRules) -> Result<Self, ValidationError> {
        if !input.is_object() {
            return Err(ValidationError::single(
                "input",
                CODE_INVALID_TYPE,
                "Expected object",
            ));
        }

        let mut errors = ValidationErrors::new();

        let page = rules.page_rule().apply(input.get("page"), &mut errors);
        let limit = rules
            .limit_rule()
            .apply(input.get("limit"), &mut errors)
            .and_then(|limit| u32::try_from(limit).ok());

        match (page, limit) {
            (Some(page), Some(limit)) if errors.is_empty() => Ok(Self { page, limit }),
            _ => Err(errors.into()),
        }
    }

    /// [`PaginationInput::parse_with`] with a log event for the outcome.
    pub fn check_with(input: &Value, rules: &PaginationRules) -> Result<Self, ValidationError> {
        let result = Self::parse_with(input, rules);
        log_outcome(Self::NAME, &result);
        result
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(u64::from(self.limit))
    }
}

impl Default for PaginationInput {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Validate for PaginationInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let rules = PaginationRules::default();
        let mut errors = ValidationErrors::new();

        rules.page_rule().check(self.page as f64, &mut errors);
        rules.limit_rule().check(f64::from(self.limit), &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Schema for PaginationInput {
    const NAME: &'static str = "pagination";

    fn parse(input: &Value) -> Result<Self, ValidationError> {
        Self::parse_with(input, &PaginationRules::default())
    }
}

/// Defaults and bounds used when resolving pagination input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationRules {
    pub default_page: u64,
    pub default_limit: u32,
    pub max_limit: u32,
}

impl PaginationRules {
    /// `page` has no upper bound.
    fn page_rule(&self) -> NumberRule {
        NumberRule {
            field: "page",
            default: self.default_page,
            max: None,
        }
    }

    fn limit_rule(&self) -> NumberRule {
        NumberRule {
            field: "limit",
            default: u64::from(self.default_limit),
            max: Some(u64::from(self.max_limit)),
        }
    }
}

impl Default for PaginationRules {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE,
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}
