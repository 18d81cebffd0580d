//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Store traits are minimal and key-value focused

pub mod in_memory_store;
pub mod preference_store;

use thiserror::Error;

pub use in_memory_store::InMemoryPreferenceStore;
pub use preference_store::{PreferenceStore, PreferenceStoreExt};

#[cfg(test)]
pub use preference_store::MockPreferenceStore;

/// Domain-specific errors for store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes and
/// user-facing messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Preference domain error.
    #[error(transparent)]
    Preference(#[from] crate::preferences::PreferenceError),
}
