//! HTTP request adapters
//!
//! - `common`: validating extractors (`ValidatedJson`, `ValidatedQuery`,
//!   `ValidatedPath`) and the response envelope they reject with

pub mod common;

pub use common::{ApiResponse, SchemaRejection, ValidatedJson, ValidatedPath, ValidatedQuery};
