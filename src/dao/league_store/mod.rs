/// JSON file backend.
pub mod json;

use crate::dao::models::{GameEntity, LeagueSnapshot, PlayerEntity, TeamEntity};
use crate::dao::storage::StorageResult;
use crate::state::week::Week;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for the league collections.
///
/// Every `save_*` call replaces the whole collection.
pub trait LeagueStore: Send + Sync {
    /// Read every collection, falling back to empty defaults.
    fn load(&self) -> BoxFuture<'static, StorageResult<LeagueSnapshot>>;
    /// Replace the stored players.
    fn save_players(&self, players: Vec<PlayerEntity>) -> BoxFuture<'static, StorageResult<()>>;
    /// Replace the stored teams.
    fn save_teams(&self, teams: Vec<TeamEntity>) -> BoxFuture<'static, StorageResult<()>>;
    /// Replace the stored games.
    fn save_games(&self, games: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>>;
    /// Replace the stored current week.
    fn save_current_week(&self, week: Week) -> BoxFuture<'static, StorageResult<()>>;
    /// Check that the backend can still be reached.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
