//! Database path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::data_root;

/// File name of the preference database.
pub const DATABASE_FILE_NAME: &str = "preferences.db";

/// Database location under a given data root.
pub fn database_path_in(root: &Path) -> PathBuf {
    root.join("data").join(DATABASE_FILE_NAME)
}

/// Get the path to the preference database file.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let path = database_path_in(&data_root()?);

    if let Some(data_dir) = path.parent() {
        fs::create_dir_all(data_dir).map_err(|e| PathError::CreateFailed {
            path: data_dir.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    Ok(path)
}
