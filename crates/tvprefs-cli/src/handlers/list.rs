//! `tvprefs list`.

use anyhow::Result;
use tvprefs_core::{Category, SettingEntry};

use crate::bootstrap::CliContext;

/// Print every setting, grouped by category, or as JSON.
pub async fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let entries = ctx.prefs.snapshot().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_table(&entries));
    }
    Ok(())
}

/// Render entries as an aligned table. Stored (non-default) values are
/// marked with `*`.
pub fn render_table(entries: &[SettingEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.setting.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut current: Option<Category> = None;
    for entry in entries {
        let category = entry.category;
        if current != Some(category) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(category.label());
            out.push('\n');
            current = Some(category);
        }
        let marker = if entry.is_default { ' ' } else { '*' };
        out.push_str(&format!(
            "  {marker} {:<width$}  {}\n",
            entry.setting.name(),
            entry.value
        ));
    }
    out
}
