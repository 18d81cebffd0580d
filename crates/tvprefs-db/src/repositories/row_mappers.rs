//! Conversions between preference values and `preferences` table columns.

use tvprefs_core::{PreferenceKind, PreferenceValue, RepositoryError};

/// Split a value into its `kind` tag and textual `value` column.
pub fn encode_value(value: &PreferenceValue) -> (&'static str, String) {
    (value.kind().as_str(), value.to_string())
}

/// Rebuild a value from its `kind` and `value` columns.
pub fn decode_value(key: &str, kind: &str, raw: &str) -> Result<PreferenceValue, RepositoryError> {
    let kind = PreferenceKind::from_tag(kind).ok_or_else(|| {
        RepositoryError::Serialization(format!("{key}: unknown kind {kind:?}"))
    })?;

    match kind {
        PreferenceKind::String => Ok(PreferenceValue::String(raw.to_string())),
        PreferenceKind::Bool => match raw {
            "true" => Ok(PreferenceValue::Bool(true)),
            "false" => Ok(PreferenceValue::Bool(false)),
            other => Err(RepositoryError::Serialization(format!(
                "{key}: {other:?} is not a bool"
            ))),
        },
        PreferenceKind::Int => raw.parse().map(PreferenceValue::Int).map_err(|e| {
            RepositoryError::Serialization(format!("{key}: {raw:?} is not an int: {e}"))
        }),
    }
}
