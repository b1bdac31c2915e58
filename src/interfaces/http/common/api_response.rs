//! Common response envelope

use serde::{Deserialize, Serialize};

use crate::shared::types::FieldIssue;

/// Standard API response envelope.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "...", "details": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Error description, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field-level diagnostics for validation failures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldIssue>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: Vec::new(),
        }
    }

    pub fn invalid(message: impl Into<String>, details: Vec<FieldIssue>) -> Self {
        Self {
            details,
            ..Self::error(message)
        }
    }
}
