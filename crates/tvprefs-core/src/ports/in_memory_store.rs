//! In-process implementation of [`PreferenceStore`].

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PreferenceStore, RepositoryError};
use crate::preferences::PreferenceValue;

/// Preference store held entirely in memory.
///
/// Useful for tests and for embedding where persistence is handled
/// elsewhere. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<String, PreferenceValue>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw key-value pairs.
    pub fn with_values<K, I>(values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, PreferenceValue)>,
    {
        Self {
            values: RwLock::new(values.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<PreferenceValue>, RepositoryError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: PreferenceValue) -> Result<(), RepositoryError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.values.write().await.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, RepositoryError> {
        let mut keys: Vec<String> = self.values.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
