//! Notification adapter that routes operator messages through tracing.
//!
//! The original host surfaces these as UI toasts; a headless engine logs
//! them on a dedicated target so deployments can filter or forward them.

use crate::infrastructure::ports::Notifier;

pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        tracing::info!(target: "engrenages::notifications", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "engrenages::notifications", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "engrenages::notifications", "{message}");
    }
}
