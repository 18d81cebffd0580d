//! Declared user settings.
//!
//! Every setting is bound to exactly one store key and a default that applies
//! while the key is absent. The definitions live in a single static table,
//! [`SETTINGS`], ordered the same way as the [`Setting`] variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PreferenceError;
use super::value::{PreferenceKind, PreferenceValue};

/// Settings section, used for grouping in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Authentication,
    Display,
    Playback,
    Video,
    Audio,
    LiveTv,
    CrashReporting,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Authentication => "Authentication",
            Self::Display => "Display",
            Self::Playback => "Playback",
            Self::Video => "Playback - Video",
            Self::Audio => "Playback - Audio",
            Self::LiveTv => "Live TV",
            Self::CrashReporting => "Crash reporting",
        }
    }
}

/// Compile-time default of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Str(&'static str),
    Bool(bool),
}

impl DefaultValue {
    pub const fn kind(self) -> PreferenceKind {
        match self {
            Self::Str(_) => PreferenceKind::String,
            Self::Bool(_) => PreferenceKind::Bool,
        }
    }

    pub fn to_value(self) -> PreferenceValue {
        match self {
            Self::Str(s) => PreferenceValue::String(s.to_string()),
            Self::Bool(b) => PreferenceValue::Bool(b),
        }
    }
}

/// Static definition of one setting.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub setting: Setting,
    /// Symbolic camelCase name, e.g. `backdropEnabled`.
    pub name: &'static str,
    /// Key in the preference store. This is the setting's identity.
    pub key: &'static str,
    pub default: DefaultValue,
    pub category: Category,
    pub description: &'static str,
    /// No typed setter is exposed; written through the generic path only.
    pub read_only: bool,
}

/// All user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Setting {
    LoginBehavior,
    PasswordPromptEnabled,
    PasswordDPadEnabled,
    AutoSignOutTimeout,
    BackdropEnabled,
    InfoPanelEnabled,
    PremieresEnabled,
    SeasonalGreetingsEnabled,
    DebuggingEnabled,
    MaxBitrate,
    MediaQueuingEnabled,
    ResumeSubtractDuration,
    CinemaModeEnabled,
    VideoPlayer,
    RefreshRateSwitchingEnabled,
    ExternalVideoPlayerSendPath,
    AudioOption,
    DtsEnabled,
    Ac3Enabled,
    LiveTvMode,
    LiveTvDirectPlayEnabled,
    LiveTvUseVlc,
    LiveTvUseExternalPlayer,
    AcraEnabled,
    AcraNoPrompt,
    AcraIncludeSystemLogs,
}

const fn def(
    setting: Setting,
    name: &'static str,
    key: &'static str,
    default: DefaultValue,
    category: Category,
    description: &'static str,
) -> SettingDef {
    SettingDef {
        setting,
        name,
        key,
        default,
        category,
        description,
        read_only: false,
    }
}

/// Definition table, in [`Setting`] declaration order.
pub static SETTINGS: [SettingDef; 26] = {
    use Category::{Audio, Authentication, CrashReporting, Display, LiveTv, Playback, Video};
    use DefaultValue::{Bool, Str};

    [
        SettingDef {
            read_only: true,
            ..def(
                Setting::LoginBehavior,
                "loginBehavior",
                "pref_login_behavior",
                Str("0"),
                Authentication,
                "Login behavior on start: 0 shows the login screen, 1 logs in as the user who set it",
            )
        },
        def(
            Setting::PasswordPromptEnabled,
            "passwordPromptEnabled",
            "pref_auto_pw_prompt",
            Bool(false),
            Authentication,
            "Ask for password when starting the app",
        ),
        def(
            Setting::PasswordDPadEnabled,
            "passwordDPadEnabled",
            "pref_alt_pw_entry",
            Bool(false),
            Authentication,
            "Log in using a pin when one is set",
        ),
        def(
            Setting::AutoSignOutTimeout,
            "autoSignOutTimeout",
            "pref_auto_logoff_timeout",
            Str("3600000"),
            Authentication,
            "Sign out automatically after this many milliseconds",
        ),
        def(
            Setting::BackdropEnabled,
            "backdropEnabled",
            "pref_show_backdrop",
            Bool(false),
            Display,
            "Show background images while browsing",
        ),
        def(
            Setting::InfoPanelEnabled,
            "infoPanelEnabled",
            "pref_enable_info_panel",
            Bool(false),
            Display,
            "Show additional information for the selected item",
        ),
        def(
            Setting::PremieresEnabled,
            "premieresEnabled",
            "pref_enable_premieres",
            Bool(false),
            Display,
            "Show premieres on the home screen",
        ),
        def(
            Setting::SeasonalGreetingsEnabled,
            "seasonalGreetingsEnabled",
            "pref_enable_themes",
            Bool(false),
            Display,
            "Show a notification to celebrate holidays",
        ),
        def(
            Setting::DebuggingEnabled,
            "debuggingEnabled",
            "pref_enable_debug",
            Bool(false),
            Display,
            "Show additional debug information",
        ),
        def(
            Setting::MaxBitrate,
            "maxBitrate",
            "pref_max_bitrate",
            Str("0"),
            Playback,
            "Maximum playback bitrate in Mbit/s, 0 means auto",
        ),
        def(
            Setting::MediaQueuingEnabled,
            "mediaQueuingEnabled",
            "pref_enable_tv_queuing",
            Bool(false),
            Playback,
            "Auto-play the next item",
        ),
        def(
            Setting::ResumeSubtractDuration,
            "resumeSubtractDuration",
            "pref_resume_preroll",
            Str("0"),
            Playback,
            "Seconds to subtract from the resume position",
        ),
        def(
            Setting::CinemaModeEnabled,
            "cinemaModeEnabled",
            "pref_enable_cinema_mode",
            Bool(false),
            Playback,
            "Enable cinema mode",
        ),
        def(
            Setting::VideoPlayer,
            "videoPlayer",
            "pref_video_player",
            Str("auto"),
            Video,
            "Preferred video player: auto, exoplayer, vlc or external",
        ),
        def(
            Setting::RefreshRateSwitchingEnabled,
            "refreshRateSwitchingEnabled",
            "pref_refresh_switching",
            Bool(false),
            Video,
            "Switch display refresh rate when the device supports it",
        ),
        def(
            Setting::ExternalVideoPlayerSendPath,
            "externalVideoPlayerSendPath",
            "pref_send_path_external",
            Bool(false),
            Video,
            "Send a file path instead of a stream URL to the external player",
        ),
        def(
            Setting::AudioOption,
            "audioOption",
            "pref_audio_option",
            Str("0"),
            Audio,
            "Audio output: 0 direct, 1 downmix to stereo",
        ),
        def(
            Setting::DtsEnabled,
            "dtsEnabled",
            "pref_bitstream_dts",
            Bool(false),
            Audio,
            "Enable DTS bitstreaming",
        ),
        def(
            Setting::Ac3Enabled,
            "ac3Enabled",
            "pref_bitstream_ac3",
            Bool(false),
            Audio,
            "Enable AC3 bitstreaming",
        ),
        def(
            Setting::LiveTvMode,
            "liveTvMode",
            "pref_live_tv_mode",
            Bool(false),
            LiveTv,
            "Open live TV when the app starts",
        ),
        def(
            Setting::LiveTvDirectPlayEnabled,
            "liveTvDirectPlayEnabled",
            "pref_live_direct",
            Bool(false),
            LiveTv,
            "Use direct play for live TV",
        ),
        def(
            Setting::LiveTvUseVlc,
            "liveTvUseVlc",
            "pref_enable_vlc_livetv",
            Bool(false),
            LiveTv,
            "Use VLC for live TV playback",
        ),
        def(
            Setting::LiveTvUseExternalPlayer,
            "liveTvUseExternalPlayer",
            "pref_live_tv_use_external",
            Bool(false),
            LiveTv,
            "Use the external player for live TV playback",
        ),
        def(
            Setting::AcraEnabled,
            "acraEnabled",
            "acra.enable",
            Bool(false),
            CrashReporting,
            "Enable crash reporting",
        ),
        def(
            Setting::AcraNoPrompt,
            "acraNoPrompt",
            "acra.alwaysaccept",
            Bool(false),
            CrashReporting,
            "Never prompt before sending crash reports",
        ),
        def(
            Setting::AcraIncludeSystemLogs,
            "acraIncludeSystemLogs",
            "acra.syslog.enable",
            Bool(true),
            CrashReporting,
            "Include system logs in crash reports",
        ),
    ]
};

impl Setting {
    /// Every setting, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        SETTINGS.iter().map(|def| def.setting)
    }

    pub fn definition(self) -> &'static SettingDef {
        &SETTINGS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn key(self) -> &'static str {
        self.definition().key
    }

    pub fn kind(self) -> PreferenceKind {
        self.definition().default.kind()
    }

    pub fn default_value(self) -> PreferenceValue {
        self.definition().default.to_value()
    }

    pub fn is_read_only(self) -> bool {
        self.definition().read_only
    }

    /// Look a setting up by its store key.
    pub fn from_key(key: &str) -> Option<Self> {
        SETTINGS.iter().find(|def| def.key == key).map(|def| def.setting)
    }

    /// Look a setting up by its symbolic name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        SETTINGS
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
            .map(|def| def.setting)
    }
}

impl FromStr for Setting {
    type Err = PreferenceError;

    /// Accepts either the symbolic name or the store key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_name(s)
            .or_else(|| Self::from_key(s))
            .ok_or_else(|| PreferenceError::UnknownSetting(s.to_string()))
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
