use tracing::info;

use crate::{
    dto::player::PlayerDto,
    error::ServiceError,
    state::{Changes, SharedState},
};

/// Store a new player, assigning the next id when none is supplied.
pub async fn create_player(
    state: &SharedState,
    player: PlayerDto,
) -> Result<PlayerDto, ServiceError> {
    let created = state
        .with_league_mut(|league| {
            let created = league.players.create(player.into());
            Ok::<_, ServiceError>((created, Changes::PLAYERS))
        })
        .await?;

    info!(id = ?created.id, name = %created.name, "player created");
    Ok(created.into())
}

/// All players ordered by ascending rank.
pub async fn list_players(state: &SharedState) -> Vec<PlayerDto> {
    state
        .read_league(|league| {
            league
                .players_by_rank()
                .into_iter()
                .map(Into::into)
                .collect()
        })
        .await
}

/// Replace the player stored under `id`. Returns `None` when no player matches.
pub async fn update_player(
    state: &SharedState,
    id: u32,
    player: PlayerDto,
) -> Result<Option<PlayerDto>, ServiceError> {
    let updated = state
        .with_league_mut(|league| {
            let updated = league.players.update(id, player.into());
            let changes = if updated.is_some() {
                Changes::PLAYERS
            } else {
                Changes::NONE
            };
            Ok::<_, ServiceError>((updated, changes))
        })
        .await?;

    Ok(updated.map(Into::into))
}

/// Remove every player stored under `id`. Deleting an unknown id is not an error.
pub async fn delete_player(state: &SharedState, id: u32) -> Result<(), ServiceError> {
    let removed = state
        .with_league_mut(|league| {
            let removed = league.players.delete(id);
            Ok::<_, ServiceError>((removed, Changes::PLAYERS))
        })
        .await?;

    info!(id, removed, "player deleted");
    Ok(())
}
