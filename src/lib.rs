//! # Input Validator
//!
//! Reusable input schemas for request handling layers.
//!
//! - **IdInput**: a payload with a single UUID `id`
//! - **PaginationInput**: `page` / `limit`, coerced from strings or numbers,
//!   with defaults and bounds
//!
//! ## Layout
//!
//! - **shared**: schemas, coercion, error types, pagination helpers
//! - **interfaces**: Axum extractors that run the schemas on requests
//! - **config**: TOML configuration (logging, pagination rules)
//! - **telemetry**: tracing subscriber setup for binaries

pub mod config;
pub mod interfaces;
pub mod shared;
pub mod telemetry;

pub use config::{default_config_path, AppConfig, ConfigError, LoggingConfig};
pub use shared::types::{FieldIssue, InputError, Paginated, ValidationError};
pub use shared::validations::{IdInput, PaginationInput, PaginationRules, Schema};
pub use telemetry::init_tracing;
