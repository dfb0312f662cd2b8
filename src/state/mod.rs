/// League aggregate and change tracking.
pub mod league;
/// Id-assigning record collections.
pub mod registry;
/// Scheduling phase of the league.
pub mod week;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;

use crate::dao::{league_store::LeagueStore, storage::StorageError};

pub use self::league::{Changes, League};

/// Handle shared by every route handler.
pub type SharedState = Arc<AppState>;

/// Central application state: the in-memory league and the store backing it.
///
/// Mutations hold the league write lock until the touched documents have been rewritten, so
/// two requests can never interleave their read-modify-write cycles.
pub struct AppState {
    store: Arc<dyn LeagueStore>,
    league: RwLock<League>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn LeagueStore>, league: League) -> SharedState {
        Arc::new(Self {
            store,
            league: RwLock::new(league),
        })
    }

    /// Load every collection from `store` and build the shared state around it.
    pub async fn load(store: Arc<dyn LeagueStore>) -> Result<SharedState, StorageError> {
        let snapshot = store.load().await?;
        Ok(Self::new(store, snapshot.into()))
    }

    /// Handle to the persistence backend.
    pub fn store(&self) -> Arc<dyn LeagueStore> {
        self.store.clone()
    }

    /// Run `read` against the current league under the read lock.
    pub async fn read_league<F, T>(&self, read: F) -> T
    where
        F: FnOnce(&League) -> T,
    {
        let guard = self.league.read().await;
        read(&*guard)
    }

    /// Run `work` against the league under the write lock, then rewrite the documents it
    /// reports as changed before releasing the lock.
    ///
    /// Write failures are logged and swallowed: the in-memory league stays authoritative for
    /// the rest of the process lifetime.
    pub async fn with_league_mut<F, T, E>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(&mut League) -> Result<(T, Changes), E>,
    {
        let mut guard = self.league.write().await;
        let (value, changes) = work(&mut *guard)?;
        self.persist(&*guard, changes).await;
        Ok(value)
    }

    async fn persist(&self, league: &League, changes: Changes) {
        if changes.players {
            if let Err(err) = self.store.save_players(league.players.snapshot()).await {
                error!(error = %err, "failed to save players");
            }
        }
        if changes.teams {
            if let Err(err) = self.store.save_teams(league.teams.snapshot()).await {
                error!(error = %err, "failed to save teams");
            }
        }
        if changes.games {
            if let Err(err) = self.store.save_games(league.games.snapshot()).await {
                error!(error = %err, "failed to save games");
            }
        }
        if changes.current_week {
            if let Err(err) = self.store.save_current_week(league.current_week).await {
                error!(error = %err, "failed to save current week");
            }
        }
    }
}
