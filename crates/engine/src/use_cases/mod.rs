//! Use cases - the operations the engine exposes.

pub mod configuration;

pub use configuration::{ConfigError, ConfigurationManager, CONFIG_SETTING_KEY};
