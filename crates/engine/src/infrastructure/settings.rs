//! SQLite-backed settings storage.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, SettingsError, SettingsStore};

/// SQLite implementation of the world-scoped settings store.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteSettingsStore {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, SettingsError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(storage_error)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(storage_error)?;

        Ok(Self { pool, clock })
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get_text(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row.map(|row| row.get("value")))
    }

    async fn set_text(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }
}

fn storage_error(err: sqlx::Error) -> SettingsError {
    SettingsError::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SystemClock;

    async fn test_store() -> (tempfile::TempDir, SqliteSettingsStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.db");
        let store = SqliteSettingsStore::new(path.to_str().unwrap(), Arc::new(SystemClock))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn missing_key_returns_none() {
        let (_dir, store) = test_store().await;
        assert_eq!(store.get_text("configurationToml").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let (_dir, store) = test_store().await;
        store.set_text("configurationToml", "a = 1\n").await.unwrap();
        assert_eq!(
            store.get_text("configurationToml").await.unwrap().as_deref(),
            Some("a = 1\n")
        );
    }

    #[tokio::test]
    async fn second_write_overwrites_the_first() {
        let (_dir, store) = test_store().await;
        store.set_text("configurationToml", "first").await.unwrap();
        store.set_text("configurationToml", "second").await.unwrap();
        assert_eq!(
            store.get_text("configurationToml").await.unwrap().as_deref(),
            Some("second")
        );
    }
}
