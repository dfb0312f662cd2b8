//! Per-match stat accumulation.

use indexmap::IndexMap;

use crate::{dao::models::PlayerEntity, dto::matches::PlayerGameStats};

/// The six counters tracked for every player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatLine {
    /// Points scored.
    pub points: u32,
    /// Throws that hit the table.
    pub table_hits: u32,
    /// Throws attempted.
    pub throws: u32,
    /// Clean catches.
    pub catches: u32,
    /// Dropped catches.
    pub drops: u32,
    /// Saves made with the feet.
    pub fifas: u32,
}

impl StatLine {
    /// Add `other` field by field.
    pub fn absorb(&mut self, other: &StatLine) {
        self.points = self.points.saturating_add(other.points);
        self.table_hits = self.table_hits.saturating_add(other.table_hits);
        self.throws = self.throws.saturating_add(other.throws);
        self.catches = self.catches.saturating_add(other.catches);
        self.drops = self.drops.saturating_add(other.drops);
        self.fifas = self.fifas.saturating_add(other.fifas);
    }

    /// Add these totals onto a player's cumulative counters.
    pub fn apply_to(&self, player: &mut PlayerEntity) {
        player.points = player.points.saturating_add(self.points);
        player.table_hits = player.table_hits.saturating_add(self.table_hits);
        player.throws = player.throws.saturating_add(self.throws);
        player.catches = player.catches.saturating_add(self.catches);
        player.drops = player.drops.saturating_add(self.drops);
        player.fifas = player.fifas.saturating_add(self.fifas);
    }
}

impl From<&PlayerGameStats> for StatLine {
    fn from(stats: &PlayerGameStats) -> Self {
        Self {
            points: stats.points,
            table_hits: stats.table_hits,
            throws: stats.throws,
            catches: stats.catches,
            drops: stats.drops,
            fifas: stats.fifas,
        }
    }
}

/// Running totals keyed by player id, restricted to the ids it was seeded with.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    totals: IndexMap<u32, StatLine>,
}

impl StatAccumulator {
    /// Start with a zeroed line for every eligible player id. Duplicates collapse.
    pub fn seeded(player_ids: impl IntoIterator<Item = u32>) -> Self {
        let totals = player_ids
            .into_iter()
            .map(|id| (id, StatLine::default()))
            .collect();
        Self { totals }
    }

    /// Add `line` to `player_id`'s totals. Returns `false` when the id is not eligible.
    pub fn record(&mut self, player_id: u32, line: &StatLine) -> bool {
        match self.totals.get_mut(&player_id) {
            Some(total) => {
                total.absorb(line);
                true
            }
            None => false,
        }
    }

    /// Totals recorded so far for `player_id`, if eligible.
    pub fn get(&self, player_id: u32) -> Option<&StatLine> {
        self.totals.get(&player_id)
    }

    /// Totals in seeding order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &StatLine)> {
        self.totals.iter().map(|(id, line)| (*id, line))
    }

    /// Number of eligible player ids.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether no player id is eligible.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
