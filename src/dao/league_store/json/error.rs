//! Error types raised by the JSON file store.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Convenient result alias returning [`JsonStoreError`] failures.
pub type JsonResult<T> = Result<T, JsonStoreError>;

/// Failures that can occur while reading or writing the league documents.
#[derive(Debug, Error)]
pub enum JsonStoreError {
    /// The data directory could not be created.
    #[error("failed to create data directory `{}`", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The data directory could not be inspected.
    #[error("failed to inspect data directory `{}`", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The configured data path exists but is not a directory.
    #[error("data path `{}` is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    /// A collection could not be encoded as JSON.
    #[error("failed to serialize `{}`", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Writing the temporary document failed.
    #[error("failed to write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Moving the temporary document over the live one failed.
    #[error("failed to replace `{}`", .path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl JsonStoreError {
    /// File name of the document a failed write was targeting.
    ///
    /// Failures on the data directory itself have no document.
    pub fn document(&self) -> Option<String> {
        let path: &Path = match self {
            JsonStoreError::Serialize { path, .. }
            | JsonStoreError::Write { path, .. }
            | JsonStoreError::Replace { path, .. } => path.as_path(),
            JsonStoreError::CreateDir { .. }
            | JsonStoreError::Inspect { .. }
            | JsonStoreError::NotADirectory { .. } => return None,
        };
        let name = path.file_name()?.to_string_lossy();
        Some(name.trim_end_matches(".tmp").to_owned())
    }
}
