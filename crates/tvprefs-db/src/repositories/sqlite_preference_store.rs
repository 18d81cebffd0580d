//! `SQLite` implementation of the `PreferenceStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::trace;

use tvprefs_core::{PreferenceStore, PreferenceValue, RepositoryError};

use super::row_mappers::{decode_value, encode_value};

/// `SQLite` implementation of the `PreferenceStore` trait.
///
/// One row per key; the primitive type is kept in the `kind` column so a
/// value reads back as the same variant it was written as.
pub struct SqlitePreferenceStore {
    pool: SqlitePool,
}

impl SqlitePreferenceStore {
    /// Create a new `SQLite` preference store.
    ///
    /// The pool should come from `setup_database`, which creates the table.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage_err(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<PreferenceValue>, RepositoryError> {
        let row = sqlx::query("SELECT kind, value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;

        match row {
            Some(r) => {
                let kind: String = r.try_get("kind").map_err(storage_err)?;
                let raw: String = r.try_get("value").map_err(storage_err)?;
                decode_value(key, &kind, &raw).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: PreferenceValue) -> Result<(), RepositoryError> {
        let (kind, raw) = encode_value(&value);
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "INSERT OR REPLACE INTO preferences (key, kind, value, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(key)
        .bind(kind)
        .bind(&raw)
        .bind(&updated_at)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;

        trace!(key, kind, "Stored preference");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM preferences WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, RepositoryError> {
        let rows = sqlx::query("SELECT key FROM preferences ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;

        rows.iter()
            .map(|r| r.try_get::<String, _>("key").map_err(storage_err))
            .collect()
    }
}
