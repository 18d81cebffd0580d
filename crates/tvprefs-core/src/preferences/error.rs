use thiserror::Error;

use super::value::PreferenceKind;

/// Preference domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Setting {key} holds {expected} values, got {found}")]
    TypeMismatch {
        key: String,
        expected: PreferenceKind,
        found: PreferenceKind,
    },

    #[error("Invalid value for {key}: {value:?} is not a {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: PreferenceKind,
    },

    #[error("Migrations must have strictly ascending target versions ({previous} then {next})")]
    MigrationOrder { previous: i64, next: i64 },
}
