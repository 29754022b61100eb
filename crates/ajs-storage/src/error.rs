use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Lock poisoned in {store} {location}")]
    LockPoisoned {
        store: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid storage key '{key}': {message} {location}")]
    InvalidKey {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize value: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to backup corrupted file: {source} {location}")]
    BackupFailed {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl StorageError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => {
                "Storage is disabled or blocked. \
                   Identity will only last for this session."
            }
            Self::LockPoisoned { .. } => {
                "A previous write panicked mid-way. \
                   Recreate the store to recover."
            }
            Self::InvalidKey { .. } => {
                "Storage keys must be plain names. \
                   Check the configured cookie and localStorage keys."
            }
            Self::DirCreation { .. } | Self::FileWrite { .. } => {
                "Unable to write to the storage directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read stored value. \
                   The file may be locked by another process."
            }
            Self::Serialization { .. } => {
                "Internal error preparing stored data. \
                   Please report this issue."
            }
            Self::AtomicRename { .. } => {
                "Unable to save value safely. \
                   Check disk space and try again."
            }
            Self::BackupFailed { .. } => {
                "Unable to backup corrupted file. \
                   Check file permissions in the storage directory."
            }
        }
    }

    /// Creates Unavailable error at caller location.
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates LockPoisoned error at caller location.
    #[track_caller]
    pub fn lock_poisoned(store: &'static str) -> Self {
        Self::LockPoisoned {
            store,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidKey error at caller location.
    #[track_caller]
    pub fn invalid_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileRead error at caller location.
    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates FileWrite error at caller location.
    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates BackupFailed error at caller location.
    #[track_caller]
    pub fn backup_failed(source: std::io::Error) -> Self {
        Self::BackupFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
