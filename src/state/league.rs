//! League aggregate and the change set driving persistence.

use crate::dao::models::{GameEntity, LeagueSnapshot, PlayerEntity, TeamEntity};

use super::{registry::Registry, week::Week};

/// In-memory league data: the three collections plus the current week.
#[derive(Debug, Clone, Default)]
pub struct League {
    /// Player records, in insertion order.
    pub players: Registry<PlayerEntity>,
    /// Team records, in insertion order.
    pub teams: Registry<TeamEntity>,
    /// Scheduled games, in insertion order.
    pub games: Registry<GameEntity>,
    /// Current scheduling phase.
    pub current_week: Week,
}

impl League {
    /// Players ordered by ascending rank; ties keep insertion order.
    pub fn players_by_rank(&self) -> Vec<PlayerEntity> {
        let mut players = self.players.snapshot();
        players.sort_by_key(|player| player.rank);
        players
    }

    /// Games in which `team_id` appears on either side.
    pub fn team_schedule(&self, team_id: u32) -> Vec<GameEntity> {
        self.games
            .records()
            .iter()
            .filter(|game| game.involves(team_id))
            .cloned()
            .collect()
    }

    /// Copy every collection for persistence or export.
    pub fn snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot {
            players: self.players.snapshot(),
            teams: self.teams.snapshot(),
            games: self.games.snapshot(),
            current_week: self.current_week,
        }
    }
}

impl From<LeagueSnapshot> for League {
    fn from(snapshot: LeagueSnapshot) -> Self {
        Self {
            players: Registry::new(snapshot.players),
            teams: Registry::new(snapshot.teams),
            games: Registry::new(snapshot.games),
            current_week: snapshot.current_week,
        }
    }
}

/// Collections touched by a mutation, used to decide which documents to rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    /// Rewrite `players.json`.
    pub players: bool,
    /// Rewrite `teams.json`.
    pub teams: bool,
    /// Rewrite `games.json`.
    pub games: bool,
    /// Rewrite `current_week.json`.
    pub current_week: bool,
}

impl Changes {
    /// Nothing to persist.
    pub const NONE: Self = Self {
        players: false,
        teams: false,
        games: false,
        current_week: false,
    };
    /// Only the players document.
    pub const PLAYERS: Self = Self {
        players: true,
        ..Self::NONE
    };
    /// Only the teams document.
    pub const TEAMS: Self = Self {
        teams: true,
        ..Self::NONE
    };
    /// Only the games document.
    pub const GAMES: Self = Self {
        games: true,
        ..Self::NONE
    };
    /// Only the current-week document.
    pub const CURRENT_WEEK: Self = Self {
        current_week: true,
        ..Self::NONE
    };

    /// Combine two change sets.
    pub const fn and(self, other: Self) -> Self {
        Self {
            players: self.players || other.players,
            teams: self.teams || other.teams,
            games: self.games || other.games,
            current_week: self.current_week || other.current_week,
        }
    }
}
