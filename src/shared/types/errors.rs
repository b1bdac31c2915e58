use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single violated constraint, attached to the input field it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldIssue {
    /// Name of the offending field (`id`, `page`, `limit`)
    pub field: String,
    /// Machine-readable rule code, e.g. `not_integer` or `too_big`
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl FieldIssue {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Structured validation failure.
///
/// Always carries at least one [`FieldIssue`]. Issues are grouped by field
/// (fields in alphabetical order) and keep the order in which the rules of a
/// field were checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn from_issues(mut issues: Vec<FieldIssue>) -> Self {
        // stable: rule order inside one field is preserved
        issues.sort_by(|a, b| a.field.cmp(&b.field));
        Self { issues }
    }

    pub fn single(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            issues: vec![FieldIssue::new(field, code, message)],
        }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    /// Issues reported for one field.
    pub fn field(&self, name: &str) -> impl Iterator<Item = &FieldIssue> + '_ {
        let name = name.to_owned();
        self.issues.iter().filter(move |issue| issue.field == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == name)
    }

    /// Rule codes reported for one field, in check order.
    pub fn codes_for(&self, name: &str) -> Vec<&str> {
        self.field(name).map(|issue| issue.code.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "Validation failed");
        }
        let rendered: Vec<String> = self.issues.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl std::error::Error for ValidationError {}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let issues = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let code = e.code.to_string();
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| code.clone());
                    FieldIssue::new(field.to_string(), code, message)
                })
            })
            .collect();

        Self::from_issues(issues)
    }
}

/// Failure of one of the text entry points (`parse_json`, `parse_query`).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Malformed query string: {0}")]
    MalformedQuery(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl InputError {
    /// The field diagnostics, when the input was well-formed but invalid.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
