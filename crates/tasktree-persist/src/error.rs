//! Error types for the persistence layer
//!
//! Every variant is recoverable: a failed write leaves the previously
//! stored value intact and the caller may retry.

use std::io;

/// Errors reported by storage backends and the collection codec
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Write rejected because it would exceed the backend's quota
    #[error("quota exceeded writing key '{key}'")]
    QuotaExceeded {
        /// Key the rejected write targeted
        key: String,
    },

    /// IO error while writing or removing a key
    #[error("io error on key '{key}': {source}")]
    Io {
        /// Key the failing operation targeted
        key: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Key contains characters the backend cannot store
    #[error("invalid key: '{key}'")]
    InvalidKey {
        /// The offending key
        key: String,
    },

    /// Value could not be JSON-encoded
    #[error("encode error on key '{key}': {source}")]
    Encode {
        /// Key the value was destined for
        key: String,
        /// Underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    /// Create quota error for key
    pub fn quota_exceeded(key: impl Into<String>) -> Self {
        Self::QuotaExceeded { key: key.into() }
    }

    /// Create IO error for key
    pub fn io(key: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Create invalid-key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Create encode error for key
    pub fn encode(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            key: key.into(),
            source,
        }
    }
}

/// Result type alias for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_error_display() {
        let err = PersistenceError::quota_exceeded("allTasks");
        assert_eq!(err.to_string(), "quota exceeded writing key 'allTasks'");
    }

    #[test]
    fn io_error_display() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = PersistenceError::io("innerTasks", inner);
        assert!(err.to_string().contains("io error on key 'innerTasks'"));
    }

    #[test]
    fn invalid_key_display() {
        let err = PersistenceError::invalid_key("../escape");
        assert_eq!(err.to_string(), "invalid key: '../escape'");
    }
}
