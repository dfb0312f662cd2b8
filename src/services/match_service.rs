//! Match submission: folds per-game player stats into cumulative player records and updates
//! the two teams' win/loss records.

use tracing::{debug, info};

use crate::{
    dto::matches::{MatchSubmission, MatchSummary},
    error::ServiceError,
    services::aggregation::{StatAccumulator, StatLine},
    state::{Changes, League, SharedState},
};

const TEAMS_UPDATED: usize = 2;

/// Validate and apply a match, persisting players and teams.
pub async fn submit_match(
    state: &SharedState,
    submission: MatchSubmission,
) -> Result<MatchSummary, ServiceError> {
    let players_updated = state
        .with_league_mut(|league| {
            let players_updated = apply_match(league, &submission)?;
            Ok::<_, ServiceError>((players_updated, Changes::PLAYERS.and(Changes::TEAMS)))
        })
        .await?;

    info!(
        team_a = submission.team_a_id,
        team_b = submission.team_b_id,
        winner = submission.winner_id,
        games = submission.games.len(),
        players_updated,
        "match submitted"
    );

    Ok(MatchSummary {
        message: "Match submitted successfully".into(),
        players_updated,
        teams_updated: TEAMS_UPDATED,
    })
}

/// Apply `submission` to `league` and return how many roster ids accumulated stats.
///
/// Nothing is mutated unless both teams exist and the winner is one of them. Stats for ids
/// outside the six roster slots are ignored, as are roster ids without a player record.
/// `num_games` is not checked against the submitted games.
pub fn apply_match(
    league: &mut League,
    submission: &MatchSubmission,
) -> Result<usize, ServiceError> {
    let (Some(team_a), Some(team_b)) = (
        league.teams.get(submission.team_a_id),
        league.teams.get(submission.team_b_id),
    ) else {
        return Err(ServiceError::NotFound("One or both teams not found".into()));
    };

    if submission.winner_id != submission.team_a_id && submission.winner_id != submission.team_b_id
    {
        return Err(ServiceError::InvalidInput(
            "Winner ID must be one of the participating teams".into(),
        ));
    }

    let mut accumulator =
        StatAccumulator::seeded(team_a.roster().into_iter().chain(team_b.roster()));

    for game in &submission.games {
        for stats in game.team_a_players.iter().chain(&game.team_b_players) {
            if !accumulator.record(stats.player_id, &StatLine::from(stats)) {
                debug!(player_id = stats.player_id, "ignoring stats for non-roster player");
            }
        }
    }

    for (player_id, totals) in accumulator.iter() {
        match league.players.get_mut(player_id) {
            Some(player) => totals.apply_to(player),
            None => debug!(player_id, "no player record for roster id; dropping stats"),
        }
    }

    let loser_id = if submission.winner_id == submission.team_a_id {
        submission.team_b_id
    } else {
        submission.team_a_id
    };
    if let Some(winner) = league.teams.get_mut(submission.winner_id) {
        winner.wins = winner.wins.saturating_add(1);
    }
    if let Some(loser) = league.teams.get_mut(loser_id) {
        loser.losses = loser.losses.saturating_add(1);
    }

    Ok(accumulator.len())
}
