//! Persistence error types.
//!
//! Loading never surfaces these to the caller as failures: a snapshot that
//! cannot be read or parsed is replaced by the default state and the error
//! is kept in [`LoadOutcome`](crate::LoadOutcome) so the host can warn.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The slot content could not be turned into a table state.
    #[error("Stored table state under '{key}' is malformed")]
    MalformedPersistedState {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Serialization error.
    #[error("Failed to serialize table state")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The storage key cannot be used by this slot.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::MalformedPersistedState { .. } => {
                "The saved table could not be read and was replaced with a new one.".to_string()
            }
            Self::Serialization { .. } => "An error occurred while saving the table.".to_string(),
            Self::InvalidKey(key) => {
                format!("'{key}' cannot be used as a storage key.")
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the table to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the data directory.".into())
                } else {
                    Some("Check that you have permission to write to the data directory.".into())
                }
            }
            Self::MalformedPersistedState { .. } => None,
            Self::Serialization { .. } => None,
            Self::InvalidKey(_) => {
                Some("Use only letters, digits, '-' and '_' in the storage key.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different data directory.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
