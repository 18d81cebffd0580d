//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database file is resolved, the `SQLite` store is
//! created, and the preference registry is opened (running migrations).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tvprefs_core::{PreferenceStore, UserPreferences, database_path};
use tvprefs_db::StoreFactory;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Preference database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path()?,
        })
    }

    /// Use `db` when given, otherwise the default database location.
    pub fn resolve(db: Option<PathBuf>) -> Result<Self> {
        match db {
            Some(database_path) => Ok(Self { database_path }),
            None => Self::with_defaults(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The preference registry.
    pub prefs: UserPreferences,
    /// Database file backing `prefs`.
    pub database_path: PathBuf,
}

/// Bootstrap the CLI application against the configured database.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let prefs = StoreFactory::open_user_preferences(&config.database_path).await?;

    let report = prefs.migration_report();
    if !report.is_noop() {
        info!(
            from = report.from_version,
            to = report.to_version,
            "Migrated preferences"
        );
    }

    Ok(CliContext {
        prefs,
        database_path: config.database_path,
    })
}

/// Bootstrap with a custom store (for testing).
pub async fn bootstrap_with(
    store: Arc<dyn PreferenceStore>,
    database_path: PathBuf,
) -> Result<CliContext> {
    let prefs = UserPreferences::open(store).await?;
    Ok(CliContext {
        prefs,
        database_path,
    })
}
