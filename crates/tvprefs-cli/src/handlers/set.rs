//! `tvprefs set`.

use anyhow::Result;
use tvprefs_core::Setting;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Parse `value` as the setting's type and store it.
pub async fn execute(ctx: &CliContext, setting: Setting, value: &str) -> Result<()> {
    ctx.prefs
        .set_from_text(setting, value)
        .await
        .map_err(CliError::from)?;
    println!("✓ {} = {}", setting.name(), ctx.prefs.get(setting).await);
    Ok(())
}
