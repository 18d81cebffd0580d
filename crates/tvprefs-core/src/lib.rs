//! Typed user preferences over a key-value preference store.
//!
//! - [`preferences`]: declared settings, values and typed option readings
//! - [`ports`]: the [`PreferenceStore`] port and its in-memory implementation
//! - [`migrations`]: version-gated transforms applied when a store is opened
//! - [`services`]: the [`UserPreferences`] registry
//! - [`paths`]: data directory and database file resolution

#![deny(unused_crate_dependencies)]

pub mod migrations;
pub mod paths;
pub mod ports;
pub mod preferences;
pub mod services;

// Re-export commonly used types for convenience
pub use migrations::{
    INITIAL_VERSION, LEGACY_VIDEO_USE_EXTERNAL_KEY, Migration, MigrationFn, MigrationReport,
    StepFuture, USER_PREFERENCE_MIGRATIONS, VERSION_KEY, latest_version, run_migrations,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    CoreError, InMemoryPreferenceStore, PreferenceStore, PreferenceStoreExt, RepositoryError,
};
pub use preferences::{
    AudioOption, Category, DefaultValue, LoginBehavior, PreferenceError, PreferenceKind,
    PreferenceValue, SETTINGS, Setting, SettingDef, VideoPlayer,
};
pub use services::{SettingEntry, UserPreferences};
