//! Payloads for submitting a played match.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stat deltas for one player in one game of a match.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlayerGameStats {
    pub player_id: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub table_hits: u32,
    #[serde(default)]
    pub throws: u32,
    #[serde(default)]
    pub catches: u32,
    #[serde(default)]
    pub drops: u32,
    #[serde(default)]
    pub fifas: u32,
}

/// Per-player stats for both sides of a single game.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GameStats {
    pub team_a_players: Vec<PlayerGameStats>,
    pub team_b_players: Vec<PlayerGameStats>,
}

/// A played match between two teams, made of any number of games.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MatchSubmission {
    pub team_a_id: u32,
    pub team_b_id: u32,
    /// Informational only; never checked against `games`.
    pub num_games: u32,
    pub games: Vec<GameStats>,
    /// Must be `team_a_id` or `team_b_id`.
    pub winner_id: u32,
}

/// Returned once a match has been applied.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct MatchSummary {
    pub message: String,
    /// Distinct roster player ids that received stats, whether or not a player record exists.
    pub players_updated: usize,
    pub teams_updated: usize,
}
