//! Player routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::{
        common::{MessageResponse, UpdateResponse},
        player::PlayerDto,
    },
    error::AppError,
    services::player_service,
    state::SharedState,
};

/// Player CRUD routes.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route("/players/{id}", put(update_player).delete(delete_player))
}

/// Create a player; the id is assigned when omitted.
#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = PlayerDto,
    responses((status = 200, description = "Player created", body = PlayerDto))
)]
pub async fn create_player(
    State(state): State<SharedState>,
    Json(payload): Json<PlayerDto>,
) -> Result<Json<PlayerDto>, AppError> {
    Ok(Json(player_service::create_player(&state, payload).await?))
}

/// List players ordered by rank.
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    responses((status = 200, description = "Players by ascending rank", body = [PlayerDto]))
)]
pub async fn list_players(State(state): State<SharedState>) -> Json<Vec<PlayerDto>> {
    Json(player_service::list_players(&state).await)
}

/// Replace a player. An unknown id yields `{"error": "Player not found"}` with status 200.
#[utoipa::path(
    put,
    path = "/players/{id}",
    tag = "players",
    params(("id" = u32, Path, description = "Identifier of the player to replace")),
    request_body = PlayerDto,
    responses(
        (status = 200, description = "Player replaced, or inline error body", body = PlayerDto)
    )
)]
pub async fn update_player(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(payload): Json<PlayerDto>,
) -> Result<Json<UpdateResponse<PlayerDto>>, AppError> {
    let outcome = player_service::update_player(&state, id, payload).await?;
    Ok(Json(UpdateResponse::from_outcome(outcome, "Player")))
}

/// Delete a player. Unknown ids are accepted.
#[utoipa::path(
    delete,
    path = "/players/{id}",
    tag = "players",
    params(("id" = u32, Path, description = "Identifier of the player to delete")),
    responses((status = 200, description = "Player deleted", body = MessageResponse))
)]
pub async fn delete_player(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, AppError> {
    player_service::delete_player(&state, id).await?;
    Ok(Json(MessageResponse::new("Player deleted")))
}
