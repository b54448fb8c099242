//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Settings storage (could swap SQLite -> host world settings)
//! - Default-configuration source (bundled file vs HTTP-served package)
//! - Operator notifications (could swap log output -> UI toasts)
//! - Clock (for testing)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings storage error: {0}")]
    Storage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch the default configuration: {0}")]
    Unavailable(String),
}

// =============================================================================
// Ports
// =============================================================================

/// Durable key/value text storage for world-scoped settings.
///
/// Writers only ever overwrite whole values; there is no merge and no
/// history, so last-write-wins is safe for the single configuration slot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get_text(&self, key: &str) -> Result<Option<String>, SettingsError>;
    async fn set_text(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Source of the bundled default configuration document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefaultConfigSource: Send + Sync {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Operator-facing notifications (the host UI surfaces these).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Clock abstraction for testable timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
