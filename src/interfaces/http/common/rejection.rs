//! Rejection shared by the validating extractors.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use super::ApiResponse;
use crate::shared::types::ValidationError;

/// Why a validating extractor refused the request.
#[derive(Debug)]
pub enum SchemaRejection {
    /// The body was not JSON.
    Json(JsonRejection),
    /// The query string could not be decoded.
    Query(QueryRejection),
    /// Path parameters could not be decoded.
    Path(PathRejection),
    /// Input decoded but failed validation.
    Invalid(ValidationError),
}

impl SchemaRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Json(_) | Self::Query(_) | Self::Path(_) => StatusCode::BAD_REQUEST,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<ValidationError> for SchemaRejection {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

impl IntoResponse for SchemaRejection {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Json(rejection) => {
                ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection.body_text()))
            }
            Self::Query(rejection) => {
                ApiResponse::<()>::error(format!("Invalid query: {}", rejection.body_text()))
            }
            Self::Path(rejection) => {
                ApiResponse::<()>::error(format!("Invalid path: {}", rejection.body_text()))
            }
            Self::Invalid(err) => {
                debug!(error = %err, "request input rejected");
                let message = err.to_string();
                ApiResponse::<()>::invalid(message, err.into_issues())
            }
        };

        (status, Json(body)).into_response()
    }
}
