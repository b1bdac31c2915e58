//! Query-string and path-parameter conversion into untyped schema input.

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::Uri;
use serde_json::{Map, Value};

use crate::shared::types::InputError;

/// Decode a URL query string (with or without the leading `?`) into a JSON
/// object whose values are all strings. A repeated key keeps its last value.
pub fn query_params(query: &str) -> Result<Value, InputError> {
    let query = query.trim_start_matches('?');
    let uri: Uri = format!("/?{query}")
        .parse()
        .map_err(|e: axum::http::uri::InvalidUri| InputError::MalformedQuery(e.to_string()))?;

    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&uri)
        .map_err(|e| InputError::MalformedQuery(e.body_text()))?;

    Ok(string_map(params))
}

/// Turn decoded string parameters into a JSON object.
pub fn string_map(params: HashMap<String, String>) -> Value {
    Value::Object(
        params
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect::<Map<String, Value>>(),
    )
}
