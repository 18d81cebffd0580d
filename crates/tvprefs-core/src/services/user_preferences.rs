//! User preference registry.
//!
//! Typed access to every declared [`Setting`] over an injected
//! [`PreferenceStore`]. Opening the registry brings the store's schema up to
//! date before anything else can read it.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::migrations::{
    Migration, MigrationReport, USER_PREFERENCE_MIGRATIONS, VERSION_KEY, INITIAL_VERSION,
    run_migrations,
};
use crate::ports::{CoreError, PreferenceStore, PreferenceStoreExt};
use crate::preferences::{
    AudioOption, Category, LoginBehavior, PreferenceError, PreferenceValue, Setting, VideoPlayer,
    parse_max_bitrate, parse_resume_preroll, parse_sign_out_timeout,
};

/// A setting together with its resolved value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingEntry {
    pub setting: Setting,
    pub key: &'static str,
    pub category: Category,
    pub value: PreferenceValue,
    /// Nothing usable is stored; `value` is the declared default.
    pub is_default: bool,
}

/// User preferences backed by a preference store.
pub struct UserPreferences {
    store: Arc<dyn PreferenceStore>,
    migration_report: MigrationReport,
}

impl UserPreferences {
    /// Open the registry, applying any pending user-preference migrations.
    ///
    /// Store failures during migration are returned; the registry is not
    /// usable until they are resolved.
    pub async fn open(store: Arc<dyn PreferenceStore>) -> Result<Self, CoreError> {
        Self::open_with_migrations(store, USER_PREFERENCE_MIGRATIONS).await
    }

    /// Open the registry with an explicit migration list.
    pub async fn open_with_migrations(
        store: Arc<dyn PreferenceStore>,
        migrations: &[Migration],
    ) -> Result<Self, CoreError> {
        let migration_report = run_migrations(store.as_ref(), migrations).await?;
        Ok(Self {
            store,
            migration_report,
        })
    }

    /// What the migration run at open time did.
    pub const fn migration_report(&self) -> &MigrationReport {
        &self.migration_report
    }

    /// Raw store access.
    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    /// Current stored schema version.
    pub async fn schema_version(&self) -> Result<i64, CoreError> {
        Ok(self.store.get_int(VERSION_KEY, INITIAL_VERSION).await?)
    }

    /// Resolved value of `setting`.
    ///
    /// Never fails: an absent key, a value of the wrong type, or a failed
    /// store read all resolve to the declared default.
    pub async fn get(&self, setting: Setting) -> PreferenceValue {
        self.lookup(setting)
            .await
            .unwrap_or_else(|| setting.default_value())
    }

    /// Write `value` under the key of `setting`.
    ///
    /// The value must be of the setting's kind. Contents are not validated.
    pub async fn set(&self, setting: Setting, value: PreferenceValue) -> Result<(), CoreError> {
        if value.kind() != setting.kind() {
            return Err(PreferenceError::TypeMismatch {
                key: setting.key().to_string(),
                expected: setting.kind(),
                found: value.kind(),
            }
            .into());
        }
        debug!(key = setting.key(), %value, "Writing preference");
        self.store.set(setting.key(), value).await?;
        Ok(())
    }

    /// Parse `raw` as the setting's kind and write it.
    pub async fn set_from_text(&self, setting: Setting, raw: &str) -> Result<(), CoreError> {
        let value = PreferenceValue::parse_as(setting.kind(), raw).ok_or_else(|| {
            PreferenceError::InvalidValue {
                key: setting.key().to_string(),
                value: raw.to_string(),
                expected: setting.kind(),
            }
        })?;
        self.set(setting, value).await
    }

    /// Remove the stored value so the default applies again.
    pub async fn reset(&self, setting: Setting) -> Result<(), CoreError> {
        debug!(key = setting.key(), "Resetting preference");
        self.store.remove(setting.key()).await?;
        Ok(())
    }

    /// Reset every declared setting. Undeclared keys are kept.
    pub async fn reset_all(&self) -> Result<(), CoreError> {
        for setting in Setting::all() {
            self.reset(setting).await?;
        }
        Ok(())
    }

    /// Every setting with its resolved value, in declaration order.
    pub async fn snapshot(&self) -> Vec<SettingEntry> {
        let mut entries = Vec::new();
        for setting in Setting::all() {
            let stored = self.lookup(setting).await;
            let is_default = stored.is_none();
            entries.push(SettingEntry {
                setting,
                key: setting.key(),
                category: setting.definition().category,
                value: stored.unwrap_or_else(|| setting.default_value()),
                is_default,
            });
        }
        entries
    }

    /// Resolved value rendered as text. Booleans render as `true`/`false`.
    pub async fn get_string(&self, setting: Setting) -> String {
        match self.get(setting).await {
            PreferenceValue::String(s) => s,
            other => other.to_string(),
        }
    }

    /// Resolved boolean. String-typed settings read as `false`.
    pub async fn get_bool(&self, setting: Setting) -> bool {
        self.get(setting).await.as_bool().unwrap_or(false)
    }

    /// Stored value if present and of the right kind.
    async fn lookup(&self, setting: Setting) -> Option<PreferenceValue> {
        match self.store.get(setting.key()).await {
            Ok(Some(value)) if value.kind() == setting.kind() => Some(value),
            Ok(Some(value)) => {
                debug!(
                    key = setting.key(),
                    expected = %setting.kind(),
                    found = %value.kind(),
                    "Stored preference has the wrong type, using default"
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(key = setting.key(), error = %e, "Preference read failed, using default");
                None
            }
        }
    }

    async fn put_string(&self, setting: Setting, value: &str) -> Result<(), CoreError> {
        self.set(setting, PreferenceValue::String(value.to_string()))
            .await
    }

    async fn put_bool(&self, setting: Setting, value: bool) -> Result<(), CoreError> {
        self.set(setting, PreferenceValue::Bool(value)).await
    }
}

// Typed accessors, grouped the way the settings screens group them.
impl UserPreferences {
    /* Authentication */

    /// Raw login behavior. No typed setter; written by the settings screen
    /// through [`UserPreferences::set`].
    pub async fn login_behavior(&self) -> String {
        self.get_string(Setting::LoginBehavior).await
    }

    pub async fn login_behavior_mode(&self) -> LoginBehavior {
        LoginBehavior::parse(&self.login_behavior().await)
    }

    pub async fn password_prompt_enabled(&self) -> bool {
        self.get_bool(Setting::PasswordPromptEnabled).await
    }

    pub async fn set_password_prompt_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::PasswordPromptEnabled, value).await
    }

    pub async fn password_dpad_enabled(&self) -> bool {
        self.get_bool(Setting::PasswordDPadEnabled).await
    }

    pub async fn set_password_dpad_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::PasswordDPadEnabled, value).await
    }

    /// Milliseconds before automatic sign out, as stored.
    pub async fn auto_sign_out_timeout(&self) -> String {
        self.get_string(Setting::AutoSignOutTimeout).await
    }

    pub async fn auto_sign_out_timeout_duration(&self) -> Duration {
        parse_sign_out_timeout(&self.auto_sign_out_timeout().await)
    }

    pub async fn set_auto_sign_out_timeout(&self, value: &str) -> Result<(), CoreError> {
        self.put_string(Setting::AutoSignOutTimeout, value).await
    }

    /* Display */

    pub async fn backdrop_enabled(&self) -> bool {
        self.get_bool(Setting::BackdropEnabled).await
    }

    pub async fn set_backdrop_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::BackdropEnabled, value).await
    }

    pub async fn info_panel_enabled(&self) -> bool {
        self.get_bool(Setting::InfoPanelEnabled).await
    }

    pub async fn set_info_panel_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::InfoPanelEnabled, value).await
    }

    pub async fn premieres_enabled(&self) -> bool {
        self.get_bool(Setting::PremieresEnabled).await
    }

    pub async fn set_premieres_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::PremieresEnabled, value).await
    }

    pub async fn seasonal_greetings_enabled(&self) -> bool {
        self.get_bool(Setting::SeasonalGreetingsEnabled).await
    }

    pub async fn set_seasonal_greetings_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::SeasonalGreetingsEnabled, value)
            .await
    }

    pub async fn debugging_enabled(&self) -> bool {
        self.get_bool(Setting::DebuggingEnabled).await
    }

    pub async fn set_debugging_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::DebuggingEnabled, value).await
    }

    /* Playback - General */

    pub async fn max_bitrate(&self) -> String {
        self.get_string(Setting::MaxBitrate).await
    }

    /// Maximum bitrate in Mbit/s, `None` for automatic.
    pub async fn max_bitrate_mbps(&self) -> Option<f64> {
        parse_max_bitrate(&self.max_bitrate().await)
    }

    pub async fn set_max_bitrate(&self, value: &str) -> Result<(), CoreError> {
        self.put_string(Setting::MaxBitrate, value).await
    }

    pub async fn media_queuing_enabled(&self) -> bool {
        self.get_bool(Setting::MediaQueuingEnabled).await
    }

    pub async fn set_media_queuing_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::MediaQueuingEnabled, value).await
    }

    pub async fn resume_subtract_duration(&self) -> String {
        self.get_string(Setting::ResumeSubtractDuration).await
    }

    pub async fn resume_subtract_duration_secs(&self) -> u64 {
        parse_resume_preroll(&self.resume_subtract_duration().await)
    }

    pub async fn set_resume_subtract_duration(&self, value: &str) -> Result<(), CoreError> {
        self.put_string(Setting::ResumeSubtractDuration, value)
            .await
    }

    pub async fn cinema_mode_enabled(&self) -> bool {
        self.get_bool(Setting::CinemaModeEnabled).await
    }

    pub async fn set_cinema_mode_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::CinemaModeEnabled, value).await
    }

    /* Playback - Video */

    pub async fn video_player(&self) -> String {
        self.get_string(Setting::VideoPlayer).await
    }

    pub async fn preferred_video_player(&self) -> VideoPlayer {
        VideoPlayer::parse(&self.video_player().await)
    }

    pub async fn set_video_player(&self, value: &str) -> Result<(), CoreError> {
        self.put_string(Setting::VideoPlayer, value).await
    }

    pub async fn refresh_rate_switching_enabled(&self) -> bool {
        self.get_bool(Setting::RefreshRateSwitchingEnabled).await
    }

    pub async fn set_refresh_rate_switching_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::RefreshRateSwitchingEnabled, value)
            .await
    }

    pub async fn external_video_player_send_path(&self) -> bool {
        self.get_bool(Setting::ExternalVideoPlayerSendPath).await
    }

    pub async fn set_external_video_player_send_path(
        &self,
        value: bool,
    ) -> Result<(), CoreError> {
        self.put_bool(Setting::ExternalVideoPlayerSendPath, value)
            .await
    }

    /* Playback - Audio */

    pub async fn audio_option(&self) -> String {
        self.get_string(Setting::AudioOption).await
    }

    pub async fn audio_output(&self) -> AudioOption {
        AudioOption::parse(&self.audio_option().await)
    }

    pub async fn set_audio_option(&self, value: &str) -> Result<(), CoreError> {
        self.put_string(Setting::AudioOption, value).await
    }

    pub async fn dts_enabled(&self) -> bool {
        self.get_bool(Setting::DtsEnabled).await
    }

    pub async fn set_dts_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::DtsEnabled, value).await
    }

    pub async fn ac3_enabled(&self) -> bool {
        self.get_bool(Setting::Ac3Enabled).await
    }

    pub async fn set_ac3_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::Ac3Enabled, value).await
    }

    /* Live TV */

    pub async fn live_tv_mode(&self) -> bool {
        self.get_bool(Setting::LiveTvMode).await
    }

    pub async fn set_live_tv_mode(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::LiveTvMode, value).await
    }

    pub async fn live_tv_direct_play_enabled(&self) -> bool {
        self.get_bool(Setting::LiveTvDirectPlayEnabled).await
    }

    pub async fn set_live_tv_direct_play_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::LiveTvDirectPlayEnabled, value).await
    }

    pub async fn live_tv_use_vlc(&self) -> bool {
        self.get_bool(Setting::LiveTvUseVlc).await
    }

    pub async fn set_live_tv_use_vlc(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::LiveTvUseVlc, value).await
    }

    pub async fn live_tv_use_external_player(&self) -> bool {
        self.get_bool(Setting::LiveTvUseExternalPlayer).await
    }

    pub async fn set_live_tv_use_external_player(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::LiveTvUseExternalPlayer, value).await
    }

    /* Crash reporting */

    pub async fn acra_enabled(&self) -> bool {
        self.get_bool(Setting::AcraEnabled).await
    }

    pub async fn set_acra_enabled(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::AcraEnabled, value).await
    }

    pub async fn acra_no_prompt(&self) -> bool {
        self.get_bool(Setting::AcraNoPrompt).await
    }

    pub async fn set_acra_no_prompt(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::AcraNoPrompt, value).await
    }

    pub async fn acra_include_system_logs(&self) -> bool {
        self.get_bool(Setting::AcraIncludeSystemLogs).await
    }

    pub async fn set_acra_include_system_logs(&self, value: bool) -> Result<(), CoreError> {
        self.put_bool(Setting::AcraIncludeSystemLogs, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::LEGACY_VIDEO_USE_EXTERNAL_KEY;
    use crate::ports::{InMemoryPreferenceStore, MockPreferenceStore, RepositoryError};
    use crate::preferences::{PreferenceKind, SETTINGS};

    async fn open_empty() -> (Arc<InMemoryPreferenceStore>, UserPreferences) {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let prefs = UserPreferences::open(store.clone()).await.unwrap();
        (store, prefs)
    }

    /// A value of the setting's kind that differs from its default.
    fn non_default(setting: Setting) -> PreferenceValue {
        match setting.default_value() {
            PreferenceValue::Bool(b) => PreferenceValue::Bool(!b),
            PreferenceValue::String(s) => PreferenceValue::String(format!("{s}-changed")),
            PreferenceValue::Int(i) => PreferenceValue::Int(i + 1),
        }
    }

    #[tokio::test]
    async fn test_every_setting_starts_at_default() {
        // Skip migrations so pref_video_player stays absent too.
        let prefs =
            UserPreferences::open_with_migrations(Arc::new(InMemoryPreferenceStore::new()), &[])
                .await
                .unwrap();
        for def in &SETTINGS {
            assert_eq!(
                prefs.get(def.setting).await,
                def.default.to_value(),
                "{}",
                def.name
            );
        }
    }

    #[tokio::test]
    async fn test_every_setting_round_trips() {
        let (_, prefs) = open_empty().await;
        for setting in Setting::all() {
            let value = non_default(setting);
            prefs.set(setting, value.clone()).await.unwrap();
            assert_eq!(prefs.get(setting).await, value, "{setting}");
        }
    }

    #[tokio::test]
    async fn test_open_runs_migration_once() {
        let store = Arc::new(InMemoryPreferenceStore::with_values([(
            LEGACY_VIDEO_USE_EXTERNAL_KEY,
            PreferenceValue::Bool(true),
        )]));

        let prefs = UserPreferences::open(store.clone()).await.unwrap();
        assert_eq!(prefs.migration_report().applied, vec![2]);
        assert_eq!(prefs.preferred_video_player().await, VideoPlayer::External);
        assert_eq!(prefs.schema_version().await.unwrap(), 2);

        prefs.set_video_player("vlc").await.unwrap();
        let reopened = UserPreferences::open(store).await.unwrap();
        assert!(reopened.migration_report().is_noop());
        assert_eq!(reopened.video_player().await, "vlc");
    }

    #[tokio::test]
    async fn test_wrong_kind_in_store_reads_as_default() {
        let store = Arc::new(InMemoryPreferenceStore::with_values([
            ("pref_show_backdrop", PreferenceValue::from("true")),
            ("pref_max_bitrate", PreferenceValue::Bool(true)),
            ("acra.syslog.enable", PreferenceValue::Int(0)),
        ]));
        let prefs = UserPreferences::open(store).await.unwrap();

        assert!(!prefs.backdrop_enabled().await);
        assert_eq!(prefs.max_bitrate().await, "0");
        assert!(prefs.acra_include_system_logs().await);

        let entry = prefs
            .snapshot()
            .await
            .into_iter()
            .find(|e| e.setting == Setting::BackdropEnabled)
            .unwrap();
        assert!(entry.is_default);
    }

    #[tokio::test]
    async fn test_set_rejects_wrong_kind() {
        let (store, prefs) = open_empty().await;

        let err = prefs
            .set(Setting::DtsEnabled, PreferenceValue::from("yes"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Preference(PreferenceError::TypeMismatch {
                expected: PreferenceKind::Bool,
                found: PreferenceKind::String,
                ..
            })
        ));
        assert_eq!(store.get("pref_bitstream_dts").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_numeric_strings_are_not_validated() {
        let (store, prefs) = open_empty().await;
        prefs.set_max_bitrate("not-a-number").await.unwrap();
        assert_eq!(
            store.get("pref_max_bitrate").await.unwrap(),
            Some(PreferenceValue::from("not-a-number"))
        );
        assert_eq!(prefs.max_bitrate_mbps().await, None);
    }

    #[tokio::test]
    async fn test_set_from_text() {
        let (_, prefs) = open_empty().await;

        prefs
            .set_from_text(Setting::CinemaModeEnabled, "on")
            .await
            .unwrap();
        assert!(prefs.cinema_mode_enabled().await);

        prefs
            .set_from_text(Setting::LoginBehavior, "1")
            .await
            .unwrap();
        assert_eq!(prefs.login_behavior_mode().await, LoginBehavior::AutoLogin);

        let err = prefs
            .set_from_text(Setting::CinemaModeEnabled, "sometimes")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Preference(PreferenceError::InvalidValue { .. })
        ));
    }

    #[tokio::test]
    async fn test_reset_restores_default_and_keeps_other_keys() {
        let (store, prefs) = open_empty().await;
        prefs.set_acra_include_system_logs(false).await.unwrap();
        prefs.set_audio_option("1").await.unwrap();
        assert_eq!(prefs.audio_output().await, AudioOption::DownmixStereo);

        prefs.reset(Setting::AcraIncludeSystemLogs).await.unwrap();
        assert!(prefs.acra_include_system_logs().await);

        prefs.reset_all().await.unwrap();
        assert_eq!(prefs.audio_output().await, AudioOption::Direct);
        // Bookkeeping survives a reset of declared settings.
        assert_eq!(prefs.schema_version().await.unwrap(), 2);
        assert!(
            store
                .keys()
                .await
                .unwrap()
                .contains(&VERSION_KEY.to_string())
        );
    }

    #[tokio::test]
    async fn test_snapshot_marks_defaults() {
        let (_, prefs) = open_empty().await;
        prefs.set_live_tv_use_vlc(true).await.unwrap();

        let snapshot = prefs.snapshot().await;
        assert_eq!(snapshot.len(), SETTINGS.len());
        for entry in &snapshot {
            match entry.setting {
                Setting::LiveTvUseVlc => {
                    assert!(!entry.is_default);
                    assert_eq!(entry.value, PreferenceValue::Bool(true));
                }
                // Written by the version 2 migration.
                Setting::VideoPlayer => assert!(!entry.is_default),
                _ => assert!(entry.is_default, "{}", entry.setting),
            }
        }
    }

    #[tokio::test]
    async fn test_derived_accessors() {
        let (_, prefs) = open_empty().await;
        assert_eq!(
            prefs.auto_sign_out_timeout_duration().await,
            Duration::from_secs(3600)
        );
        prefs.set_auto_sign_out_timeout("120000").await.unwrap();
        assert_eq!(
            prefs.auto_sign_out_timeout_duration().await,
            Duration::from_secs(120)
        );

        assert_eq!(prefs.resume_subtract_duration_secs().await, 0);
        prefs.set_resume_subtract_duration("15").await.unwrap();
        assert_eq!(prefs.resume_subtract_duration_secs().await, 15);

        prefs.set_max_bitrate("8").await.unwrap();
        assert_eq!(prefs.max_bitrate_mbps().await, Some(8.0));
    }

    #[tokio::test]
    async fn test_get_string_and_bool_across_kinds() {
        let (_, prefs) = open_empty().await;
        assert_eq!(prefs.get_string(Setting::AcraIncludeSystemLogs).await, "true");
        assert!(!prefs.get_bool(Setting::VideoPlayer).await);
    }

    #[tokio::test]
    async fn test_read_failure_falls_back_to_default() {
        let mut store = MockPreferenceStore::new();
        store.expect_get().returning(|key| {
            if key == VERSION_KEY {
                Ok(Some(PreferenceValue::Int(2)))
            } else {
                Err(RepositoryError::Storage("locked".into()))
            }
        });

        let prefs = UserPreferences::open(Arc::new(store)).await.unwrap();

        assert!(prefs.acra_include_system_logs().await);
        assert_eq!(prefs.video_player().await, "auto");
    }

    #[tokio::test]
    async fn test_open_fails_when_store_is_unavailable() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .returning(|_| Err(RepositoryError::Storage("unavailable".into())));

        let result = UserPreferences::open(Arc::new(store)).await;

        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::Storage(_)))
        ));
    }
}
