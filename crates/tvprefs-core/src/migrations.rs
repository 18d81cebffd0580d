//! Version-gated preference migrations.
//!
//! A migration is plain data: a target version, a description, and a step
//! function run against the raw store. [`run_migrations`] applies every step
//! whose target is above the stored schema version, in ascending order, and
//! records each target as it completes.
//!
//! Steps are not transactional. A step interrupted before its version is
//! written will run again from the start on the next open.

use std::future::Future;
use std::pin::Pin;

use tracing::{debug, info};

use crate::ports::{CoreError, PreferenceStore, PreferenceStoreExt, RepositoryError};
use crate::preferences::{PreferenceError, Setting, VideoPlayer};

/// Store key holding the last applied schema version.
pub const VERSION_KEY: &str = "store_version";

/// Version assumed when nothing has been stored yet.
pub const INITIAL_VERSION: i64 = 0;

/// Deprecated boolean replaced by `pref_video_player` in version 2.
pub const LEGACY_VIDEO_USE_EXTERNAL_KEY: &str = "pref_video_use_external";

/// Future returned by a migration step.
pub type StepFuture<'a> = Pin<Box<dyn Future<Output = Result<(), RepositoryError>> + Send + 'a>>;

/// A migration step. Receives full read/write access to the raw store.
pub type MigrationFn = for<'a> fn(&'a dyn PreferenceStore) -> StepFuture<'a>;

/// One versioned migration.
#[derive(Clone, Copy)]
pub struct Migration {
    pub to_version: i64,
    pub description: &'static str,
    pub step: MigrationFn,
}

impl std::fmt::Debug for Migration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migration")
            .field("to_version", &self.to_version)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Migrations for the user preference store, in ascending order.
pub static USER_PREFERENCE_MIGRATIONS: &[Migration] = &[Migration {
    to_version: 2,
    description: "Replace pref_video_use_external with pref_video_player",
    step: migrate_video_player,
}];

/// Highest target version in `migrations`, or [`INITIAL_VERSION`].
pub fn latest_version(migrations: &[Migration]) -> i64 {
    migrations
        .iter()
        .map(|m| m.to_version)
        .max()
        .unwrap_or(INITIAL_VERSION)
}

fn migrate_video_player(store: &dyn PreferenceStore) -> StepFuture<'_> {
    Box::pin(async move {
        let use_external = store
            .get_bool(LEGACY_VIDEO_USE_EXTERNAL_KEY, false)
            .await?;
        let player = if use_external {
            VideoPlayer::External
        } else {
            VideoPlayer::Auto
        };
        store
            .put_string(Setting::VideoPlayer.key(), player.as_str())
            .await
    })
}

/// Outcome of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Stored version before the run.
    pub from_version: i64,
    /// Stored version after the run.
    pub to_version: i64,
    /// Targets of the steps that executed, in order.
    pub applied: Vec<i64>,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Reject lists that are not strictly ascending by target version.
pub fn validate_order(migrations: &[Migration]) -> Result<(), PreferenceError> {
    for pair in migrations.windows(2) {
        if pair[1].to_version <= pair[0].to_version {
            return Err(PreferenceError::MigrationOrder {
                previous: pair[0].to_version,
                next: pair[1].to_version,
            });
        }
    }
    Ok(())
}

/// Apply every pending migration in `migrations` to `store`.
///
/// The stored version only ever moves up: it is written once per executed
/// step, after that step succeeds.
pub async fn run_migrations(
    store: &dyn PreferenceStore,
    migrations: &[Migration],
) -> Result<MigrationReport, CoreError> {
    validate_order(migrations)?;

    let from_version = store.get_int(VERSION_KEY, INITIAL_VERSION).await?;
    let mut version = from_version;
    let mut applied = Vec::new();

    for migration in migrations {
        if version >= migration.to_version {
            debug!(
                target_version = migration.to_version,
                version, "Migration already applied"
            );
            continue;
        }

        (migration.step)(store).await?;
        store.put_int(VERSION_KEY, migration.to_version).await?;

        info!(
            from = version,
            to = migration.to_version,
            description = migration.description,
            "Applied preference migration"
        );
        version = migration.to_version;
        applied.push(migration.to_version);
    }

    Ok(MigrationReport {
        from_version,
        to_version: version,
        applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{InMemoryPreferenceStore, MockPreferenceStore};
    use crate::preferences::PreferenceValue;

    fn noop(_store: &dyn PreferenceStore) -> StepFuture<'_> {
        Box::pin(async { Ok::<(), RepositoryError>(()) })
    }

    fn mark_three(store: &dyn PreferenceStore) -> StepFuture<'_> {
        Box::pin(async move { store.put_bool("migrated_to_three", true).await })
    }

    async fn player(store: &InMemoryPreferenceStore) -> Option<PreferenceValue> {
        store.get("pref_video_player").await.unwrap()
    }

    #[tokio::test]
    async fn test_external_player_migrates_to_external() {
        let store = InMemoryPreferenceStore::with_values([(
            LEGACY_VIDEO_USE_EXTERNAL_KEY,
            PreferenceValue::Bool(true),
        )]);

        let report = run_migrations(&store, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap();

        assert_eq!(report.from_version, 0);
        assert_eq!(report.to_version, 2);
        assert_eq!(report.applied, vec![2]);
        assert_eq!(player(&store).await, Some(PreferenceValue::from("external")));
        // Old key is left in place.
        assert_eq!(
            store.get(LEGACY_VIDEO_USE_EXTERNAL_KEY).await.unwrap(),
            Some(PreferenceValue::Bool(true))
        );
        assert_eq!(
            store.get(VERSION_KEY).await.unwrap(),
            Some(PreferenceValue::Int(2))
        );
    }

    #[tokio::test]
    async fn test_absent_or_false_migrates_to_auto() {
        let absent = InMemoryPreferenceStore::new();
        run_migrations(&absent, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap();
        assert_eq!(player(&absent).await, Some(PreferenceValue::from("auto")));

        let disabled = InMemoryPreferenceStore::with_values([(
            LEGACY_VIDEO_USE_EXTERNAL_KEY,
            PreferenceValue::Bool(false),
        )]);
        run_migrations(&disabled, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap();
        assert_eq!(player(&disabled).await, Some(PreferenceValue::from("auto")));
    }

    #[tokio::test]
    async fn test_second_run_leaves_player_untouched() {
        let store = InMemoryPreferenceStore::with_values([(
            LEGACY_VIDEO_USE_EXTERNAL_KEY,
            PreferenceValue::Bool(true),
        )]);
        run_migrations(&store, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap();

        // User picks VLC and flips the legacy key; nothing should re-run.
        store
            .set("pref_video_player", PreferenceValue::from("vlc"))
            .await
            .unwrap();
        store
            .set(LEGACY_VIDEO_USE_EXTERNAL_KEY, PreferenceValue::Bool(false))
            .await
            .unwrap();

        let report = run_migrations(&store, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap();
        assert!(report.is_noop());
        assert_eq!(report.from_version, 2);
        assert_eq!(player(&store).await, Some(PreferenceValue::from("vlc")));
    }

    #[tokio::test]
    async fn test_version_never_decreases() {
        let store =
            InMemoryPreferenceStore::with_values([(VERSION_KEY, PreferenceValue::Int(5))]);

        let report = run_migrations(&store, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap();

        assert!(report.is_noop());
        assert_eq!(report.to_version, 5);
        assert_eq!(
            store.get(VERSION_KEY).await.unwrap(),
            Some(PreferenceValue::Int(5))
        );
        assert_eq!(player(&store).await, None);
    }

    #[tokio::test]
    async fn test_wrong_kind_version_reads_as_initial() {
        let store =
            InMemoryPreferenceStore::with_values([(VERSION_KEY, PreferenceValue::from("9"))]);
        let report = run_migrations(&store, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap();
        assert_eq!(report.from_version, INITIAL_VERSION);
        assert_eq!(report.applied, vec![2]);
    }

    #[tokio::test]
    async fn test_only_pending_steps_run_in_order() {
        let migrations = [
            Migration {
                to_version: 1,
                description: "first",
                step: noop,
            },
            Migration {
                to_version: 2,
                description: "second",
                step: noop,
            },
            Migration {
                to_version: 3,
                description: "third",
                step: mark_three,
            },
        ];
        let store =
            InMemoryPreferenceStore::with_values([(VERSION_KEY, PreferenceValue::Int(1))]);

        let report = run_migrations(&store, &migrations).await.unwrap();

        assert_eq!(report.applied, vec![2, 3]);
        assert_eq!(latest_version(&migrations), 3);
        assert_eq!(
            store.get("migrated_to_three").await.unwrap(),
            Some(PreferenceValue::Bool(true))
        );
    }

    #[tokio::test]
    async fn test_out_of_order_list_is_rejected_before_running() {
        let migrations = [
            Migration {
                to_version: 3,
                description: "third",
                step: mark_three,
            },
            Migration {
                to_version: 3,
                description: "duplicate",
                step: noop,
            },
        ];
        let store = InMemoryPreferenceStore::new();

        let err = run_migrations(&store, &migrations).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Preference(PreferenceError::MigrationOrder {
                previous: 3,
                next: 3
            })
        ));
        assert!(store.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_step_does_not_bump_version() {
        let mut store = MockPreferenceStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .returning(|_, _| Err(RepositoryError::Storage("read-only".into())));

        let err = run_migrations(&store, USER_PREFERENCE_MIGRATIONS)
            .await
            .unwrap_err();

        // The mock rejects every write, so the version write never happens.
        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));
    }

    #[test]
    fn test_latest_version_of_empty_list() {
        assert_eq!(latest_version(&[]), INITIAL_VERSION);
        assert_eq!(latest_version(USER_PREFERENCE_MIGRATIONS), 2);
    }
}
