use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by profile stores regardless of where the record lives.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// A stored blob could not be decoded.
    #[error("stored record `{key}` is corrupted")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }

    /// Construct a decoding error for the record stored under `key`.
    pub fn corrupted(key: &str, source: serde_json::Error) -> Self {
        StorageError::Corrupted {
            key: key.to_string(),
            source,
        }
    }
}
