//! Primitive values held by a preference store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The primitive type of a stored preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    String,
    Bool,
    /// Only used for bookkeeping keys such as the schema version.
    Int,
}

impl PreferenceKind {
    /// Stable lowercase tag, also used as the on-disk kind column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
        }
    }

    /// Parse a kind tag written by [`PreferenceKind::as_str`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(Self::String),
            "bool" => Some(Self::Bool),
            "int" => Some(Self::Int),
            _ => None,
        }
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value as it lives in the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    String(String),
    Bool(bool),
    Int(i64),
}

impl PreferenceValue {
    pub const fn kind(&self) -> PreferenceKind {
        match self {
            Self::String(_) => PreferenceKind::String,
            Self::Bool(_) => PreferenceKind::Bool,
            Self::Int(_) => PreferenceKind::Int,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Parse user-supplied text into a value of the given kind.
    ///
    /// Strings are taken verbatim. Booleans accept the usual switch
    /// spellings (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
    pub fn parse_as(kind: PreferenceKind, raw: &str) -> Option<Self> {
        match kind {
            PreferenceKind::String => Some(Self::String(raw.to_string())),
            PreferenceKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(Self::Bool(true)),
                "false" | "0" | "no" | "off" => Some(Self::Bool(false)),
                _ => None,
            },
            PreferenceKind::Int => raw.trim().parse().ok().map(Self::Int),
        }
    }
}

impl fmt::Display for PreferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PreferenceValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
