mod config;
mod error;
mod models;
mod store;

pub use config::JsonStoreConfig;
pub use error::JsonStoreError;
pub use store::JsonFileStore;

use crate::dao::storage::StorageError;

impl From<JsonStoreError> for StorageError {
    fn from(err: JsonStoreError) -> Self {
        match err.document() {
            Some(document) => StorageError::save_failed(document, err),
            None => StorageError::unavailable(err.to_string(), err),
        }
    }
}
