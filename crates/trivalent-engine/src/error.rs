//! Error types for the evaluation engine

use thiserror::Error;

/// Errors raised while loading or checking an [`EvaluatorConfig`](crate::EvaluatorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A setting is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
