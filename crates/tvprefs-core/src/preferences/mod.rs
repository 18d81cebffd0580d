//! Preference domain types.
//!
//! Pure types with no infrastructure dependencies: the declared settings,
//! the primitive values a store holds, and typed readings of string options.

mod error;
mod options;
mod setting;
mod value;

pub use error::PreferenceError;
pub use options::{
    AudioOption, DEFAULT_AUTO_SIGN_OUT_MS, LoginBehavior, VideoPlayer, parse_max_bitrate,
    parse_resume_preroll, parse_sign_out_timeout,
};
pub use setting::{Category, DefaultValue, SETTINGS, Setting, SettingDef};
pub use value::{PreferenceKind, PreferenceValue};
