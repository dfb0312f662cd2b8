//! League store backed by one JSON document per collection.

use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use futures::future::BoxFuture;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    dao::{
        league_store::LeagueStore,
        models::{GameEntity, LeagueSnapshot, PlayerEntity, TeamEntity},
        storage::StorageResult,
    },
    state::week::Week,
};

use super::{
    config::{CURRENT_WEEK_FILE, GAMES_FILE, JsonStoreConfig, PLAYERS_FILE, TEAMS_FILE},
    error::{JsonResult, JsonStoreError},
    models::{CurrentWeekDocument, StoredWeekDocument},
};

/// League store keeping one pretty-printed JSON document per collection.
///
/// Documents are written to a sibling temporary file first and then renamed over the live
/// one, so a crash mid-write leaves the previous document intact.
#[derive(Clone)]
pub struct JsonFileStore {
    config: Arc<JsonStoreConfig>,
}

impl JsonFileStore {
    /// Store rooted at `config.data_dir`.
    pub fn new(config: JsonStoreConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    async fn ensure_data_dir(&self) -> JsonResult<()> {
        let path = self.config.data_dir().to_path_buf();
        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|source| JsonStoreError::CreateDir { path, source })
    }

    /// Read a collection document. Missing or unreadable documents yield an empty collection.
    async fn read_collection<T>(&self, name: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let Some(bytes) = self.read_document(name).await else {
            return Vec::new();
        };

        match serde_json::from_slice::<Vec<T>>(&bytes) {
            Ok(records) => records,
            Err(err) => {
                warn!(file = name, error = %err, "failed to parse collection; starting empty");
                Vec::new()
            }
        }
    }

    async fn read_current_week(&self) -> Week {
        let Some(bytes) = self.read_document(CURRENT_WEEK_FILE).await else {
            return Week::default();
        };

        match serde_json::from_slice::<StoredWeekDocument>(&bytes) {
            Ok(document) => document.into_week(),
            Err(err) => {
                warn!(
                    file = CURRENT_WEEK_FILE,
                    error = %err,
                    "failed to parse current week; using default"
                );
                Week::default()
            }
        }
    }

    async fn read_document(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.config.file(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "document not found; using defaults");
                None
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read document; using defaults"
                );
                None
            }
        }
    }

    async fn write_document<T>(&self, name: &str, document: &T) -> JsonResult<()>
    where
        T: ?Sized + Serialize,
    {
        let path = self.config.file(name);
        let payload =
            serde_json::to_vec_pretty(document).map_err(|source| JsonStoreError::Serialize {
                path: path.clone(),
                source,
            })?;

        let temp_path = temporary_path(&path);
        tokio::fs::write(&temp_path, payload)
            .await
            .map_err(|source| JsonStoreError::Write {
                path: temp_path.clone(),
                source,
            })?;

        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|source| JsonStoreError::Replace {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "document written");
        Ok(())
    }
}

fn temporary_path(path: &std::path::Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

impl LeagueStore for JsonFileStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<LeagueSnapshot>> {
        let store = self.clone();
        Box::pin(async move {
            store.ensure_data_dir().await?;
            Ok(LeagueSnapshot {
                players: store.read_collection(PLAYERS_FILE).await,
                teams: store.read_collection(TEAMS_FILE).await,
                games: store.read_collection(GAMES_FILE).await,
                current_week: store.read_current_week().await,
            })
        })
    }

    fn save_players(&self, players: Vec<PlayerEntity>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .write_document(PLAYERS_FILE, &players)
                .await
                .map_err(Into::into)
        })
    }

    fn save_teams(&self, teams: Vec<TeamEntity>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .write_document(TEAMS_FILE, &teams)
                .await
                .map_err(Into::into)
        })
    }

    fn save_games(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .write_document(GAMES_FILE, &games)
                .await
                .map_err(Into::into)
        })
    }

    fn save_current_week(&self, week: Week) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .write_document(CURRENT_WEEK_FILE, &CurrentWeekDocument { week })
                .await
                .map_err(Into::into)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            let path = store.config.data_dir().to_path_buf();
            let metadata = tokio::fs::metadata(&path)
                .await
                .map_err(|source| JsonStoreError::Inspect {
                    path: path.clone(),
                    source,
                })?;

            if metadata.is_dir() {
                Ok(())
            } else {
                Err(JsonStoreError::NotADirectory { path }.into())
            }
        })
    }
}
