//! `tvprefs reset`.

use anyhow::Result;
use tvprefs_core::Setting;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Reset one setting, or all of them when `setting` is `None`.
pub async fn execute(ctx: &CliContext, setting: Option<Setting>) -> Result<()> {
    match setting {
        Some(setting) => {
            ctx.prefs.reset(setting).await.map_err(CliError::from)?;
            println!(
                "✓ {} reset to {}",
                setting.name(),
                setting.default_value()
            );
        }
        None => {
            ctx.prefs.reset_all().await.map_err(CliError::from)?;
            println!("✓ All settings reset to defaults.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tvprefs_core::InMemoryPreferenceStore;

    #[tokio::test]
    async fn test_reset_all_restores_defaults() {
        let ctx = bootstrap_with(Arc::new(InMemoryPreferenceStore::new()), PathBuf::new())
            .await
            .unwrap();
        ctx.prefs.set_cinema_mode_enabled(true).await.unwrap();
        ctx.prefs.set_acra_include_system_logs(false).await.unwrap();

        execute(&ctx, Some(Setting::CinemaModeEnabled)).await.unwrap();
        assert!(!ctx.prefs.cinema_mode_enabled().await);
        assert!(!ctx.prefs.acra_include_system_logs().await);

        execute(&ctx, None).await.unwrap();
        assert!(ctx.prefs.acra_include_system_logs().await);
    }
}
