//! Composition utilities for wiring `UserPreferences` to `SQLite`.
//!
//! Focused purely on construction; no domain logic.

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use tvprefs_core::{PreferenceStore, UserPreferences};

use crate::repositories::SqlitePreferenceStore;
use crate::setup::setup_database;

/// Factory for creating preference stores with `SQLite` backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Wrap a pool as a trait-object preference store.
    pub fn preference_store(pool: SqlitePool) -> Arc<dyn PreferenceStore> {
        Arc::new(SqlitePreferenceStore::new(pool))
    }

    /// Open (creating if needed) the database at `db_path` and return the
    /// migrated preference registry over it.
    ///
    /// ```rust,no_run
    /// use tvprefs_db::StoreFactory;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let prefs = StoreFactory::open_user_preferences("/tmp/preferences.db".as_ref()).await?;
    /// let player = prefs.preferred_video_player().await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open_user_preferences(db_path: &Path) -> anyhow::Result<UserPreferences> {
        let pool = setup_database(db_path).await?;
        let prefs = UserPreferences::open(Self::preference_store(pool)).await?;
        Ok(prefs)
    }
}
