use tracing::info;

use crate::{
    dto::{game::GameDto, team::TeamDto},
    error::ServiceError,
    state::{Changes, SharedState},
};

/// Store a new team, assigning the next id when none is supplied.
pub async fn create_team(state: &SharedState, team: TeamDto) -> Result<TeamDto, ServiceError> {
    let created = state
        .with_league_mut(|league| {
            let created = league.teams.create(team.into());
            Ok::<_, ServiceError>((created, Changes::TEAMS))
        })
        .await?;

    info!(id = ?created.id, name = %created.name, "team created");
    Ok(created.into())
}

/// Every team in stored order.
pub async fn list_teams(state: &SharedState) -> Vec<TeamDto> {
    state
        .read_league(|league| league.teams.snapshot().into_iter().map(Into::into).collect())
        .await
}

/// Replace the team stored under `id`. Returns `None` when no team matches.
pub async fn update_team(
    state: &SharedState,
    id: u32,
    team: TeamDto,
) -> Result<Option<TeamDto>, ServiceError> {
    let updated = state
        .with_league_mut(|league| {
            let updated = league.teams.update(id, team.into());
            let changes = if updated.is_some() {
                Changes::TEAMS
            } else {
                Changes::NONE
            };
            Ok::<_, ServiceError>((updated, changes))
        })
        .await?;

    Ok(updated.map(Into::into))
}

/// Remove every team stored under `id`. Unknown ids are a no-op.
pub async fn delete_team(state: &SharedState, id: u32) -> Result<(), ServiceError> {
    let removed = state
        .with_league_mut(|league| {
            let removed = league.teams.delete(id);
            Ok::<_, ServiceError>((removed, Changes::TEAMS))
        })
        .await?;

    info!(id, removed, "team deleted");
    Ok(())
}

/// Games where the team plays on either side. An unknown team simply has no games.
pub async fn team_schedule(state: &SharedState, team_id: u32) -> Vec<GameDto> {
    state
        .read_league(|league| {
            league
                .team_schedule(team_id)
                .into_iter()
                .map(Into::into)
                .collect()
        })
        .await
}
