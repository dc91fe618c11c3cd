use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by a durable key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key '{key}' {location}")]
    InvalidKey {
        key: String,
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

    #[error("Failed to remove {path}: {source} {location}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
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

    #[error("Storage quota of {limit} bytes exceeded writing '{key}' {location}")]
    QuotaExceeded {
        key: String,
        limit: usize,
        location: ErrorLocation,
    },

    #[error("Storage unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::FileRemove { .. }
                | Self::AtomicRename { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "Internal error addressing session data. Please report this issue.",
            Self::DirCreation { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. } => {
                "Unable to write session data. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read session data. \
                   The file may be locked by another process."
            }
            Self::FileRemove { .. } => {
                "Unable to delete session data. \
                   Check file permissions in the session directory."
            }
            Self::QuotaExceeded { .. } => {
                "Session storage is full. \
                   You stay signed in until this program exits."
            }
            Self::Unavailable { .. } => {
                "Session storage is disabled. \
                   You stay signed in until this program exits."
            }
        }
    }

    /// Creates InvalidKey error at caller location.
    #[track_caller]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
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

    /// Creates FileRemove error at caller location.
    #[track_caller]
    pub fn file_remove(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRemove {
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

    /// Creates QuotaExceeded error at caller location.
    #[track_caller]
    pub fn quota_exceeded(key: impl Into<String>, limit: usize) -> Self {
        Self::QuotaExceeded {
            key: key.into(),
            limit,
            location: ErrorLocation::from(Location::caller()),
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
}

pub type StorageErrorResult<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by the session store to its callers.
///
/// Storage failures never appear here; the store logs them and continues in
/// memory.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No user data provided for login {location}")]
    EmptyIdentity { location: ErrorLocation },
}

impl SessionError {
    /// Creates EmptyIdentity error at caller location.
    #[track_caller]
    pub fn empty_identity() -> Self {
        Self::EmptyIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SessionErrorResult<T> = std::result::Result<T, SessionError>;
