// The manager exposes the full configuration contract - not every operation
// is wired to a route yet
#![allow(dead_code)]

//! Configuration management use case.
//!
//! Owns the authoritative in-memory world configuration: loads it at
//! startup, gates imports and edits through validation, persists the raw
//! TOML text, and publishes the derived skill schema to the registry.
//!
//! The active configuration and the published schema are swapped together
//! under the same write lock, so readers never observe one without the
//! other. No queueing is imposed on concurrent updates; the operation
//! whose persist-and-apply step completes last wins.

use std::sync::Arc;

use tokio::sync::RwLock;

use engrenages_domain::{derive_skill_schema, SkillSchema, WorldConfiguration};

use crate::infrastructure::ports::{
    DefaultConfigSource, FetchError, Notifier, SettingsError, SettingsStore,
};
use crate::stores::registry::{ConfigRegistry, SKILLS_CONFIG_KEY};

/// Settings key under which the raw configuration text is persisted.
pub const CONFIG_SETTING_KEY: &str = "configurationToml";

/// Errors surfaced by configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML syntax error: {0}")]
    Syntax(String),

    #[error("Invalid configuration:\n{0}")]
    Invalid(String),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Manages the active world configuration.
pub struct ConfigurationManager {
    store: Arc<dyn SettingsStore>,
    source: Arc<dyn DefaultConfigSource>,
    registry: Arc<ConfigRegistry>,
    notifier: Arc<dyn Notifier>,
    active: RwLock<Option<WorldConfiguration>>,
}

impl ConfigurationManager {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        source: Arc<dyn DefaultConfigSource>,
        registry: Arc<ConfigRegistry>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            source,
            registry,
            notifier,
            active: RwLock::new(None),
        }
    }

    /// Establish the active configuration at startup.
    ///
    /// Prefers previously persisted text; falls back to the bundled default
    /// when nothing is persisted or the store read fails. Errors are logged
    /// and notified, never propagated.
    pub async fn init(&self) {
        if let Err(e) = self.try_init().await {
            tracing::error!(error = %e, "Configuration initialization failed");
            self.notifier.error(
                "Failed to load the Engrenages configuration. See the log for details.",
            );
        }
    }

    async fn try_init(&self) -> Result<(), ConfigError> {
        let persisted = match self.store.get_text(CONFIG_SETTING_KEY).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read the persisted configuration, loading defaults");
                None
            }
        };

        match persisted {
            Some(text) if !text.trim().is_empty() => {
                // Text that was accepted before is adopted as-is, without
                // re-running validation.
                let config = WorldConfiguration::parse(&text)
                    .map_err(|e| ConfigError::Syntax(e.to_string()))?;
                self.install(config).await;
                tracing::info!("Configuration loaded from settings storage");
            }
            _ => self.load_default_configuration().await,
        }

        Ok(())
    }

    /// Load the bundled default configuration.
    ///
    /// A structurally broken default is tolerated with a warning. When the
    /// document cannot be fetched or parsed at all, the built-in minimal
    /// configuration takes over so the system is never left without one.
    pub async fn load_default_configuration(&self) {
        if let Err(e) = self.fetch_and_adopt_default().await {
            tracing::warn!(error = %e, "Falling back to the built-in minimal configuration");
            self.install(WorldConfiguration::minimal()).await;
        }
    }

    async fn fetch_and_adopt_default(&self) -> Result<(), ConfigError> {
        let text = self.source.fetch().await?;
        let config =
            WorldConfiguration::parse(&text).map_err(|e| ConfigError::Syntax(e.to_string()))?;

        let report = config.validate();
        if !report.valid {
            tracing::warn!(errors = ?report.errors, "The bundled default configuration is invalid");
            self.notifier
                .warn("The default configuration contains errors. See the log for details.");
        }

        self.store.set_text(CONFIG_SETTING_KEY, &text).await?;
        self.install(config).await;
        tracing::info!("Default configuration loaded");
        Ok(())
    }

    /// Import a configuration from user-supplied file contents.
    ///
    /// Rejects with an error on malformed or invalid input so the caller
    /// can branch; the active configuration is untouched in that case.
    pub async fn import_from_text(&self, text: &str) -> Result<bool, ConfigError> {
        let config = match WorldConfiguration::parse(text) {
            Ok(config) => config,
            Err(e) => {
                self.notifier
                    .error(&format!("Failed to read the configuration file: {e}"));
                return Err(ConfigError::Syntax(e.to_string()));
            }
        };

        let report = config.validate();
        if !report.valid {
            let joined = report.joined_errors();
            self.notifier
                .error(&format!("Invalid configuration:\n{joined}"));
            return Err(ConfigError::Invalid(joined));
        }

        self.store.set_text(CONFIG_SETTING_KEY, text).await?;
        self.install(config).await;
        self.notifier
            .info("Engrenages configuration imported successfully");
        Ok(true)
    }

    /// Update the configuration from directly edited TOML text.
    ///
    /// Unlike [`import_from_text`](Self::import_from_text) this never
    /// rejects: every failure is notified and reported as `false`.
    pub async fn update_from_text(&self, text: &str) -> bool {
        match self.try_update(text).await {
            Ok(()) => {
                self.notifier
                    .info("Engrenages configuration updated successfully");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Configuration update rejected");
                match &e {
                    ConfigError::Invalid(errors) => self
                        .notifier
                        .error(&format!("Invalid configuration:\n{errors}")),
                    _ => self.notifier.error(
                        "Failed to update the configuration. See the log for details.",
                    ),
                }
                false
            }
        }
    }

    async fn try_update(&self, text: &str) -> Result<(), ConfigError> {
        let config =
            WorldConfiguration::parse(text).map_err(|e| ConfigError::Syntax(e.to_string()))?;

        let report = config.validate();
        if !report.valid {
            return Err(ConfigError::Invalid(report.joined_errors()));
        }

        self.store.set_text(CONFIG_SETTING_KEY, text).await?;
        self.install(config).await;
        Ok(())
    }

    /// The last accepted raw TOML text, verbatim.
    ///
    /// Export is a round-trip of persisted text; the in-memory mapping is
    /// never re-serialized.
    pub async fn export_current(&self) -> Result<Option<String>, SettingsError> {
        self.store.get_text(CONFIG_SETTING_KEY).await
    }

    /// Discard the current configuration and reload the bundled default.
    pub async fn reset_to_default(&self) {
        self.load_default_configuration().await;
    }

    /// Re-derive and republish the schema from the active configuration.
    pub async fn apply_configuration(&self) {
        let active = self.active.read().await;
        if let Some(config) = active.as_ref() {
            self.publish(&derive_skill_schema(config));
        }
    }

    /// A clone of the active configuration, if one is installed.
    pub async fn active_configuration(&self) -> Option<WorldConfiguration> {
        self.active.read().await.clone()
    }

    /// Swap in a new active configuration and publish its schema as a pair.
    async fn install(&self, config: WorldConfiguration) {
        let mut active = self.active.write().await;
        self.publish(&derive_skill_schema(&config));
        *active = Some(config);
    }

    fn publish(&self, schema: &SkillSchema) {
        match serde_json::to_value(schema) {
            Ok(value) => {
                self.registry.set(SKILLS_CONFIG_KEY, value);
                tracing::info!(
                    domains = schema.domains.len(),
                    occult_enabled = schema.occult_enabled,
                    "Published skill schema"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize the skill schema");
            }
        }
    }
}
