//! Error types for store construction and lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure modes of a credential store.
///
/// `Config` and `Credential` only occur while a store is being constructed
/// and leave no usable store behind. `NotFound` is the ordinary outcome of a
/// lookup that matched nothing.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store configuration is missing, unreadable or malformed
    #[error("configuration error in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// The key file or database could not be opened or decoded
    #[error("cannot open credentials at {path}: {reason}")]
    Credential { path: PathBuf, reason: String },

    /// No entry matched the query or item name
    #[error("unable to find: {name} in {store} store")]
    NotFound { name: String, store: String },
}

impl StoreError {
    /// Returns true if this is a recoverable lookup miss rather than a
    /// construction failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StoreError::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn credential(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StoreError::Credential {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn not_found(name: impl Into<String>, store: impl Into<String>) -> Self {
        StoreError::NotFound {
            name: name.into(),
            store: store.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_query_and_store() {
        let err = StoreError::not_found("github", "personal");
        assert_eq!(err.to_string(), "unable to find: github in personal store");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_construction_errors_are_not_lookup_misses() {
        let err = StoreError::config("/tmp/config", "missing field `db`");
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("/tmp/config"));

        let err = StoreError::credential("/tmp/db.kdbx", "wrong key");
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("wrong key"));
    }
}
