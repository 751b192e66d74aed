use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by account storage and the remote identity service.
///
/// None of these ever reach the mock sign-in or sign-up validation path:
/// the only failures those operations surface come from a durable store.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid storage key '{key}': {message} {location}")]
    InvalidKey {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage unavailable: {message} {location}")]
    StorageUnavailable {
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

    #[error("Failed to read storage file at {path}: {source} {location}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write storage file at {path}: {source} {location}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to remove storage file at {path}: {source} {location}")]
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

    #[error("Failed to backup corrupted file {path}: {source} {location}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize account: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Remote identity service is not configured {location}")]
    RemoteNotConfigured { location: ErrorLocation },

    #[error("Remote identity request failed: {message} {location}")]
    RemoteHttp {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Remote identity error: {message} (code: {code}) {location}")]
    RemoteApi {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote identity response invalid: {message} {location}")]
    RemoteResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote identity call '{operation}' timed out after {timeout_ms}ms {location}")]
    RemoteTimeout {
        operation: &'static str,
        timeout_ms: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "INVALID_STORAGE_KEY",
            Self::StorageUnavailable { .. } => "STORAGE_UNAVAILABLE",
            Self::DirCreation { .. } => "STORAGE_DIR_CREATION_FAILED",
            Self::FileRead { .. } => "STORAGE_READ_FAILED",
            Self::FileWrite { .. } => "STORAGE_WRITE_FAILED",
            Self::FileRemove { .. } => "STORAGE_REMOVE_FAILED",
            Self::AtomicRename { .. } => "STORAGE_RENAME_FAILED",
            Self::BackupFailed { .. } => "STORAGE_BACKUP_FAILED",
            Self::Serialization { .. } => "SERIALIZATION_FAILED",
            Self::RemoteNotConfigured { .. } => "REMOTE_NOT_CONFIGURED",
            Self::RemoteHttp { .. } => "REMOTE_HTTP_FAILED",
            Self::RemoteApi { .. } => "REMOTE_API_ERROR",
            Self::RemoteResponse { .. } => "REMOTE_INVALID_RESPONSE",
            Self::RemoteTimeout { .. } => "REMOTE_TIMEOUT",
        }
    }

    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::FileRemove { .. }
                | Self::AtomicRename { .. }
                | Self::RemoteHttp { .. }
                | Self::RemoteTimeout { .. }
        )
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } | Self::Serialization { .. } => {
                "Internal error preparing account data. \
                   Please report this issue."
            }
            Self::StorageUnavailable { .. } => {
                "Account storage is unavailable. \
                   Restart the application."
            }
            Self::DirCreation { .. } | Self::FileWrite { .. } | Self::AtomicRename { .. } => {
                "Unable to write to the storage directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } | Self::FileRemove { .. } => {
                "Unable to access the stored account. \
                   The file may be locked by another process."
            }
            Self::BackupFailed { .. } => {
                "Unable to backup a corrupted account file. \
                   Check file permissions in the storage directory."
            }
            Self::RemoteNotConfigured { .. } => {
                "No remote identity service is configured. \
                   Local accounts remain available."
            }
            Self::RemoteHttp { .. } | Self::RemoteTimeout { .. } => {
                "The identity service could not be reached. \
                   Check the network and try again."
            }
            Self::RemoteApi { .. } | Self::RemoteResponse { .. } => {
                "The identity service rejected the request. \
                   Sign in again."
            }
        }
    }

    #[track_caller]
    pub fn invalid_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_remove(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRemove {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backup_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::BackupFailed {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote_not_configured() -> Self {
        Self::RemoteNotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote_api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RemoteApi {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote_response(message: impl Into<String>) -> Self {
        Self::RemoteResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote_timeout(operation: &'static str, timeout_ms: u64) -> Self {
        Self::RemoteTimeout {
            operation,
            timeout_ms,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::RemoteHttp {
            message: source.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
