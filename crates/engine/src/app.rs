//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{DefaultConfigSource, Notifier, SettingsStore};
use crate::stores::registry::ConfigRegistry;
use crate::use_cases::ConfigurationManager;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub config: ConfigurationManager,
    pub registry: Arc<ConfigRegistry>,
}

impl App {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        source: Arc<dyn DefaultConfigSource>,
        notifier: Arc<dyn Notifier>,
        registry: Arc<ConfigRegistry>,
    ) -> Self {
        let config = ConfigurationManager::new(store, source, registry.clone(), notifier);
        Self { config, registry }
    }
}
