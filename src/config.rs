//! Configuration module
//!
//! Loaded from a TOML file. Every section is optional and falls back to its
//! defaults:
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//!
//! [pagination]
//! default_page = 1
//! default_limit = 20
//! max_limit = 100
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::validations::PaginationRules;

/// Env var holding an explicit config path.
pub const CONFIG_ENV: &str = "INPUT_VALIDATOR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub pagination: PaginationRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, `RUST_LOG` takes precedence
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pagination;
        if p.default_page == 0 {
            return Err(ConfigError::Invalid(
                "pagination.default_page must be greater than 0".into(),
            ));
        }
        if p.max_limit == 0 {
            return Err(ConfigError::Invalid(
                "pagination.max_limit must be greater than 0".into(),
            ));
        }
        if p.default_limit == 0 || p.default_limit > p.max_limit {
            return Err(ConfigError::Invalid(format!(
                "pagination.default_limit must be between 1 and {}",
                p.max_limit
            )));
        }
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"text\" or \"json\", got \"{other}\""
            ))),
        }
    }
}

/// `<config dir>/input-validator/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("input-validator")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.pagination, PaginationRules::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [logging]
            format = "json"

            [pagination]
            max_limit = 250
            "#,
        )
        .unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.pagination.max_limit, 250);
        assert_eq!(cfg.pagination.default_limit, 20);
    }

    #[test]
    fn default_limit_above_max_is_rejected() {
        let err = AppConfig::from_toml("[pagination]\ndefault_limit = 200\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_default_page_is_rejected() {
        let err = AppConfig::from_toml("[pagination]\ndefault_page = 0\n").unwrap_err();
        assert!(err.to_string().contains("default_page"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = AppConfig::from_toml("[pagination\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/input-validator.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        assert!(default_config_path().ends_with("input-validator/config.toml"));
    }
}
