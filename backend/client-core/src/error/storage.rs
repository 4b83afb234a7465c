use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Failures of the client-local key-value storage.
///
/// These never leave the favorites store; they are logged and replaced by
/// empty-set behavior.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("Storage Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage Io Error: {path}: {source} {location}")]
    Io {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage Corrupt Error: {key}: {reason} {location}")]
    Corrupt {
        key: String,
        reason: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    #[track_caller]
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            location: ErrorLocation::from(Location::caller()),
            path: path.into(),
            source,
        }
    }
}
