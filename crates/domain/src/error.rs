//! Unified error type for the domain layer.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Malformed TOML text
    #[error("Parse error: {0}")]
    Parse(String),

    /// Well-formed document with the wrong shape
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a parse error for malformed configuration text.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a validation error for structural rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
