//! Process-wide configuration registry.
//!
//! The derived skill schema is published here for the data-model and sheet
//! layers to read. Consumers must tolerate the value changing at any time
//! and re-derive on change. The registry is an injectable instance, not a
//! global, so tests can run independent copies side by side.

use dashmap::DashMap;

/// Registry key under which the derived skill schema is published.
pub const SKILLS_CONFIG_KEY: &str = "skills.config";

/// Thread-safe key/value registry of published configuration state.
#[derive(Default)]
pub struct ConfigRegistry {
    entries: DashMap<String, serde_json::Value>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a value, replacing any previous entry.
    pub fn set(&self, key: &str, value: serde_json::Value) {
        self.entries.insert(key.to_string(), value);
    }

    /// Read a published value.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_value() {
        let registry = ConfigRegistry::new();
        registry.set("skills.config", serde_json::json!({"domains": []}));
        assert_eq!(
            registry.get("skills.config"),
            Some(serde_json::json!({"domains": []}))
        );
    }

    #[test]
    fn set_replaces_the_previous_value() {
        let registry = ConfigRegistry::new();
        registry.set("skills.config", serde_json::json!(1));
        registry.set("skills.config", serde_json::json!(2));
        assert_eq!(registry.get("skills.config"), Some(serde_json::json!(2)));
    }

    #[test]
    fn unknown_key_is_none() {
        let registry = ConfigRegistry::new();
        assert_eq!(registry.get("skills.config"), None);
    }
}
