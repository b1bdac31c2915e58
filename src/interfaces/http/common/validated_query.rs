//! Validated query-string extractor for Axum
//!
//! Query parameters always arrive as strings; the [`Schema`] coerces them.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::SchemaRejection;
use crate::shared::utils::string_map;
use crate::shared::validations::Schema;

/// Extracts and validates the query string as `T`.
///
/// ```ignore
/// async fn list(ValidatedQuery(page): ValidatedQuery<PaginationInput>) {
///     // page.limit is within 1..=100
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: Schema,
    S: Send + Sync,
{
    type Rejection = SchemaRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(SchemaRejection::Query)?;

        let value = T::check(&string_map(params))?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};

    use crate::shared::validations::PaginationInput;

    async fn handler(ValidatedQuery(page): ValidatedQuery<PaginationInput>) -> Json<PaginationInput> {
        Json(page)
    }

    async fn get_status(uri: &str) -> (StatusCode, serde_json::Value) {
        use tower::Service;
        let mut svc = Router::new().route("/items", get(handler)).into_service();
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn coerces_query_values() {
        let (status, body) = get_status("/items?page=3&limit=50").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"page": 3, "limit": 50}));
    }

    #[tokio::test]
    async fn missing_query_uses_defaults() {
        let (status, body) = get_status("/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"page": 1, "limit": 20}));
    }

    #[tokio::test]
    async fn out_of_range_limit_returns_422() {
        let (status, body) = get_status("/items?limit=101").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"][0]["field"], "limit");
        assert_eq!(body["details"][0]["code"], "too_big");
    }

    #[tokio::test]
    async fn empty_page_value_is_rejected() {
        let (status, body) = get_status("/items?page=").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"][0]["code"], "too_small");
    }
}
