use serde::{Deserialize, Serialize};

use crate::state::{registry::Identified, week::Week};

/// Player record as stored in `players.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Registry-assigned identifier. Direct edits may clear or change it.
    pub id: Option<u32>,
    /// Display name.
    pub name: String,
    /// Display ordering, lower is better.
    pub rank: i32,
    /// Cumulative points scored.
    #[serde(default)]
    pub points: u32,
    /// Cumulative table hits.
    #[serde(default)]
    pub table_hits: u32,
    /// Cumulative throws.
    #[serde(default)]
    pub throws: u32,
    /// Cumulative catches.
    #[serde(default)]
    pub catches: u32,
    /// Cumulative drops.
    #[serde(default)]
    pub drops: u32,
    /// Cumulative fifas.
    #[serde(default)]
    pub fifas: u32,
}

/// Team record as stored in `teams.json`.
///
/// Roster ids are not checked against the player collection; dangling ids are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamEntity {
    /// Registry-assigned identifier.
    pub id: Option<u32>,
    /// Display name.
    pub name: String,
    /// First roster slot.
    pub player1_id: u32,
    /// Second roster slot.
    pub player2_id: u32,
    /// Third roster slot.
    pub player3_id: u32,
    /// Matches won.
    #[serde(default)]
    pub wins: u32,
    /// Matches lost.
    #[serde(default)]
    pub losses: u32,
}

impl TeamEntity {
    /// The three rostered player ids in slot order.
    pub fn roster(&self) -> [u32; 3] {
        [self.player1_id, self.player2_id, self.player3_id]
    }
}

/// Scheduled or played game as stored in `games.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Registry-assigned identifier.
    pub id: Option<u32>,
    /// Home side.
    pub team_a_id: u32,
    /// Away side.
    pub team_b_id: u32,
    /// Score of team A.
    pub score_a: u32,
    /// Score of team B.
    pub score_b: u32,
    /// Calendar date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
    /// League week the game belongs to.
    #[serde(default)]
    pub week: Option<u8>,
}

impl GameEntity {
    /// Whether the given team plays on either side of this game.
    pub fn involves(&self, team_id: u32) -> bool {
        self.team_a_id == team_id || self.team_b_id == team_id
    }
}

/// Everything a backend loads at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueSnapshot {
    /// Player collection in stored order.
    pub players: Vec<PlayerEntity>,
    /// Team collection in stored order.
    pub teams: Vec<TeamEntity>,
    /// Game collection in stored order.
    pub games: Vec<GameEntity>,
    /// Persisted current week.
    pub current_week: Week,
}

impl Identified for PlayerEntity {
    fn id(&self) -> Option<u32> {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = Some(id);
    }
}

impl Identified for TeamEntity {
    fn id(&self) -> Option<u32> {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = Some(id);
    }
}

impl Identified for GameEntity {
    fn id(&self) -> Option<u32> {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = Some(id);
    }
}
