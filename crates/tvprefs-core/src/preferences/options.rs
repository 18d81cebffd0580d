//! Interpreted views of string-valued settings.
//!
//! The store keeps these settings as plain text. The types here give callers
//! a typed reading of that text; unrecognised text maps to the same choice
//! as the setting's default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default for `pref_auto_logoff_timeout`, in milliseconds.
pub const DEFAULT_AUTO_SIGN_OUT_MS: u64 = 3_600_000;

/// Preferred video player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlayer {
    /// Pick between ExoPlayer and libVLC per item.
    #[default]
    Auto,
    ExoPlayer,
    Vlc,
    External,
}

impl VideoPlayer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::ExoPlayer => "exoplayer",
            Self::Vlc => "vlc",
            Self::External => "external",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "exoplayer" => Self::ExoPlayer,
            "vlc" => Self::Vlc,
            "external" => Self::External,
            _ => Self::Auto,
        }
    }
}

/// What happens at login when the app starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginBehavior {
    #[default]
    ShowLogin,
    /// Log in as the user who chose this behavior.
    AutoLogin,
}

impl LoginBehavior {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowLogin => "0",
            Self::AutoLogin => "1",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => Self::AutoLogin,
            _ => Self::ShowLogin,
        }
    }
}

/// Audio output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioOption {
    #[default]
    Direct,
    /// Downmix to stereo. Disables the AC3, EAC3 and AAC LATM codecs.
    DownmixStereo,
}

impl AudioOption {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "0",
            Self::DownmixStereo => "1",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => Self::DownmixStereo,
            _ => Self::Direct,
        }
    }
}

/// Maximum bitrate in Mbit/s, `None` meaning automatic.
pub fn parse_max_bitrate(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|mbps| mbps.is_finite() && *mbps > 0.0)
}

/// Auto sign-out timeout; unparseable text falls back to the default.
pub fn parse_sign_out_timeout(raw: &str) -> Duration {
    let millis = raw.trim().parse::<u64>().unwrap_or(DEFAULT_AUTO_SIGN_OUT_MS);
    Duration::from_millis(millis)
}

/// Resume pre-roll in seconds; unparseable or negative text reads as zero.
pub fn parse_resume_preroll(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}
