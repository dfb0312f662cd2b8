//! Schedule entry management.

use tracing::info;

use crate::{
    dto::game::GameDto,
    error::ServiceError,
    state::{Changes, SharedState},
};

/// Store a new schedule entry, assigning the next id when none is supplied.
pub async fn create_game(state: &SharedState, game: GameDto) -> Result<GameDto, ServiceError> {
    let created = state
        .with_league_mut(|league| {
            let created = league.games.create(game.into());
            Ok::<_, ServiceError>((created, Changes::GAMES))
        })
        .await?;

    info!(
        id = ?created.id,
        team_a = created.team_a_id,
        team_b = created.team_b_id,
        "game created"
    );
    Ok(created.into())
}

/// Every game in stored order.
pub async fn list_games(state: &SharedState) -> Vec<GameDto> {
    state
        .read_league(|league| league.games.snapshot().into_iter().map(Into::into).collect())
        .await
}

/// Replace the game stored under `id`. Returns `None` when no game matches.
pub async fn update_game(
    state: &SharedState,
    id: u32,
    game: GameDto,
) -> Result<Option<GameDto>, ServiceError> {
    let updated = state
        .with_league_mut(|league| {
            let updated = league.games.update(id, game.into());
            let changes = if updated.is_some() {
                Changes::GAMES
            } else {
                Changes::NONE
            };
            Ok::<_, ServiceError>((updated, changes))
        })
        .await?;

    Ok(updated.map(Into::into))
}

/// Remove every game stored under `id`. Unknown ids are a no-op.
pub async fn delete_game(state: &SharedState, id: u32) -> Result<(), ServiceError> {
    let removed = state
        .with_league_mut(|league| {
            let removed = league.games.delete(id);
            Ok::<_, ServiceError>((removed, Changes::GAMES))
        })
        .await?;

    info!(id, removed, "game deleted");
    Ok(())
}
