//! Services that orchestrate domain types over the store port.

mod user_preferences;

pub use user_preferences::{SettingEntry, UserPreferences};
