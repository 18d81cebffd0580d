//! Data root resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "TVPREFS_DATA_DIR";

/// Application directory name under the system data directory.
const APP_DIR_NAME: &str = "tvprefs";

/// Resolve the data root from an optional override and the system data dir.
///
/// Resolution order:
/// 1. `override_dir`, when set and not blank
/// 2. `system_data_dir/tvprefs`
pub fn resolve_data_root(
    override_dir: Option<&str>,
    system_data_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(raw) = override_dir {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(trimmed));
    }

    system_data_dir
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::NoDataDir)
}

/// Get the root directory for application data, creating it if needed.
///
/// Honors `TVPREFS_DATA_DIR`, otherwise uses the platform data directory
/// (e.g., `~/.local/share/tvprefs`).
pub fn data_root() -> Result<PathBuf, PathError> {
    let override_dir = env::var(DATA_DIR_ENV).ok();
    let root = resolve_data_root(override_dir.as_deref(), dirs::data_local_dir())?;

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
