//! Preference store trait definition.
//!
//! This port defines the interface for the persistent key-value storage that
//! backs user preferences. Implementations handle all storage details
//! internally.

use async_trait::async_trait;
use tracing::debug;

use super::RepositoryError;
use crate::preferences::PreferenceValue;

/// Flat key-value storage for primitive preference values.
///
/// # Design Rules
///
/// - Keys are opaque strings; the store knows nothing about declared settings
/// - Each call is independent, with no atomicity across keys
/// - Removing an absent key is not an error
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<PreferenceValue>, RepositoryError>;

    /// Store `value` under `key`, replacing any previous value of any kind.
    async fn set(&self, key: &str, value: PreferenceValue) -> Result<(), RepositoryError>;

    /// Remove `key`.
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;

    /// All stored keys, sorted.
    async fn keys(&self) -> Result<Vec<String>, RepositoryError>;
}

/// Typed get-with-default and put helpers available on every store.
///
/// A stored value of the wrong primitive type reads as absent. Store failures
/// still propagate.
#[async_trait]
pub trait PreferenceStoreExt: PreferenceStore {
    async fn get_string(&self, key: &str, default: &str) -> Result<String, RepositoryError>;
    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, RepositoryError>;
    async fn get_int(&self, key: &str, default: i64) -> Result<i64, RepositoryError>;

    async fn put_string(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    async fn put_bool(&self, key: &str, value: bool) -> Result<(), RepositoryError>;
    async fn put_int(&self, key: &str, value: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<T: PreferenceStore + ?Sized> PreferenceStoreExt for T {
    async fn get_string(&self, key: &str, default: &str) -> Result<String, RepositoryError> {
        Ok(match self.get(key).await? {
            Some(PreferenceValue::String(s)) => s,
            Some(other) => {
                debug!(key, kind = %other.kind(), "Stored value is not a string, using default");
                default.to_string()
            }
            None => default.to_string(),
        })
    }

    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, RepositoryError> {
        Ok(match self.get(key).await? {
            Some(PreferenceValue::Bool(b)) => b,
            Some(other) => {
                debug!(key, kind = %other.kind(), "Stored value is not a bool, using default");
                default
            }
            None => default,
        })
    }

    async fn get_int(&self, key: &str, default: i64) -> Result<i64, RepositoryError> {
        Ok(match self.get(key).await? {
            Some(PreferenceValue::Int(i)) => i,
            Some(other) => {
                debug!(key, kind = %other.kind(), "Stored value is not an int, using default");
                default
            }
            None => default,
        })
    }

    async fn put_string(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.set(key, PreferenceValue::String(value.to_string()))
            .await
    }

    async fn put_bool(&self, key: &str, value: bool) -> Result<(), RepositoryError> {
        self.set(key, PreferenceValue::Bool(value)).await
    }

    async fn put_int(&self, key: &str, value: i64) -> Result<(), RepositoryError> {
        self.set(key, PreferenceValue::Int(value)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_typed_reads_fall_back_on_wrong_kind() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .with(eq("pref_show_backdrop"))
            .returning(|_| Ok(Some(PreferenceValue::from("yes"))));

        assert!(store.get_bool("pref_show_backdrop", true).await.unwrap());
        assert!(!store.get_bool("pref_show_backdrop", false).await.unwrap());
        assert_eq!(store.get_int("pref_show_backdrop", 7).await.unwrap(), 7);
        assert_eq!(
            store.get_string("pref_show_backdrop", "x").await.unwrap(),
            "yes"
        );
    }

    #[tokio::test]
    async fn test_typed_reads_propagate_store_failure() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .returning(|_| Err(RepositoryError::Storage("disk gone".into())));

        let err = store.get_bool("pref_enable_debug", false).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }

    #[tokio::test]
    async fn test_put_helpers_write_typed_values() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_set()
            .with(eq("store_version"), eq(PreferenceValue::Int(2)))
            .times(1)
            .returning(|_, _| Ok(()));

        let dyn_store: &dyn PreferenceStore = &store;
        dyn_store.put_int("store_version", 2).await.unwrap();
    }
}
