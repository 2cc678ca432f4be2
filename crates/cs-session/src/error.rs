use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by session storage and session transitions.
#[derive(Error, Debug)]
pub enum SessionError {
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

    #[error("Record at {path} is not valid UTF-8: {source} {location}")]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
        location: ErrorLocation,
    },

    #[error("Failed to write {path}: {source} {location}")]
    FileWrite {
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

    #[error("Failed to back up corrupted record {path}: {source} {location}")]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize session: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Storage lock poisoned: {message} {location}")]
    LockPoisoned {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials for {email} {location}")]
    InvalidCredentials {
        email: String,
        location: ErrorLocation,
    },

    #[error("Session changed while the request was in flight {location}")]
    Superseded { location: ErrorLocation },

    #[error("Session manager is not ready (state: {state}) {location}")]
    NotReady {
        state: &'static str,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::AtomicRename { .. }
                | Self::Superseded { .. }
                | Self::NotReady { .. }
        )
    }

    /// Whether the stored record itself is damaged, as opposed to the
    /// storage being unreachable.
    pub fn is_corrupted_record(&self) -> bool {
        matches!(self, Self::InvalidEncoding { .. })
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => {
                "The configured session key is not usable. \
                   Use only letters, digits, '-' and '_'."
            }
            Self::DirCreation { .. } | Self::FileWrite { .. } => {
                "Unable to write to the session directory. \
                   Check disk space and file permissions."
            }
            Self::FileRead { .. } => {
                "Unable to read the session file. \
                   The file may be locked by another process."
            }
            Self::InvalidEncoding { .. } => {
                "The session file is corrupted. \
                   It has been set aside; sign in again."
            }
            Self::AtomicRename { .. } => {
                "Unable to save the session safely. \
                   Check disk space and try again."
            }
            Self::BackupFailed { .. } => {
                "Unable to back up a corrupted session file. \
                   Check file permissions in the session directory."
            }
            Self::Serialization { .. } | Self::LockPoisoned { .. } => {
                "Internal error handling session data. \
                   Please report this issue."
            }
            Self::InvalidCredentials { .. } => "Check your email and password and try again.",
            Self::Superseded { .. } => {
                "You signed out while signing in. \
                   Sign in again to continue."
            }
            Self::NotReady { .. } => "Still restoring your previous session. Try again shortly.",
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

    /// Creates InvalidEncoding error at caller location.
    #[track_caller]
    pub fn invalid_encoding(path: PathBuf, source: std::string::FromUtf8Error) -> Self {
        Self::InvalidEncoding {
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
    pub fn backup_failed(path: PathBuf, source: std::io::Error) -> Self {
        Self::BackupFailed {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates LockPoisoned error at caller location.
    #[track_caller]
    pub fn lock_poisoned(message: impl Into<String>) -> Self {
        Self::LockPoisoned {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidCredentials error at caller location.
    #[track_caller]
    pub fn invalid_credentials(email: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Superseded error at caller location.
    #[track_caller]
    pub fn superseded() -> Self {
        Self::Superseded {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotReady error at caller location.
    #[track_caller]
    pub fn not_ready(state: &'static str) -> Self {
        Self::NotReady {
            state,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
