//! `tvprefs get`.

use anyhow::Result;
use tvprefs_core::Setting;

use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext, setting: Setting) -> Result<()> {
    println!("{}", ctx.prefs.get(setting).await);
    Ok(())
}
