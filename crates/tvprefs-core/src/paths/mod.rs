//! Path utilities for the tvprefs data directory and database file.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Resolution is split into a pure step (testable without touching the
//!   environment) and a thin wrapper that reads it

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, resolve_data_root};
