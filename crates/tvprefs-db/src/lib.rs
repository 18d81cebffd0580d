//! `SQLite` persistence for tvprefs preferences.
//!
//! Provides [`SqlitePreferenceStore`], the on-disk implementation of the
//! `PreferenceStore` port, plus database setup and wiring helpers.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export store implementations
pub use repositories::SqlitePreferenceStore;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
