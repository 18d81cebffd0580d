//! `tvprefs version`.

use anyhow::Result;
use tvprefs_core::{USER_PREFERENCE_MIGRATIONS, latest_version};

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let stored = ctx.prefs.schema_version().await.map_err(CliError::from)?;
    println!("Schema version: {stored}");
    println!(
        "Latest migration: {}",
        latest_version(USER_PREFERENCE_MIGRATIONS)
    );
    Ok(())
}
