//! `tvprefs paths`.

use std::path::Path;

use anyhow::Result;
use tvprefs_core::paths::{DATA_DIR_ENV, data_root, database_path_in};

/// Show where preferences live. `db_override` is the `--db` value, if any.
pub fn execute(db_override: Option<&Path>) -> Result<()> {
    let root = data_root()?;
    println!("Data directory: {}", root.display());
    match db_override {
        Some(db) => println!("Database:       {} (--db)", db.display()),
        None => println!("Database:       {}", database_path_in(&root).display()),
    }
    println!();
    println!("Set {DATA_DIR_ENV} to move the data directory.");
    Ok(())
}
