use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of where the league data lives.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be reached or inspected.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Backend description of the failure.
        message: String,
        /// Underlying backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// A league document could not be written back.
    #[error("failed to save league document `{document}`")]
    SaveFailed {
        /// Name of the document being replaced, e.g. `players.json`.
        document: String,
        /// Underlying backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
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

    /// Construct a failed-save error for `document`.
    pub fn save_failed(
        document: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::SaveFailed {
            document: document.into(),
            source: Box::new(source),
        }
    }
}
