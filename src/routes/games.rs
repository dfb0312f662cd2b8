//! Schedule entry routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use validator::Validate;

use crate::{
    dto::{
        common::{MessageResponse, UpdateResponse},
        game::GameDto,
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Schedule entry CRUD routes.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", put(update_game).delete(delete_game))
}

/// Create a schedule entry; the id is assigned when omitted.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = GameDto,
    responses(
        (status = 200, description = "Game created", body = GameDto),
        (status = 400, description = "Invalid date or week")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Json(payload): Json<GameDto>,
) -> Result<Json<GameDto>, AppError> {
    payload.validate()?;
    Ok(Json(game_service::create_game(&state, payload).await?))
}

/// List every scheduled game.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses((status = 200, description = "Games in stored order", body = [GameDto]))
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<Vec<GameDto>> {
    Json(game_service::list_games(&state).await)
}

/// Replace a game. An unknown id yields `{"error": "Game not found"}` with status 200.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "games",
    params(("id" = u32, Path, description = "Identifier of the game to replace")),
    request_body = GameDto,
    responses(
        (status = 200, description = "Game replaced, or inline error body", body = GameDto),
        (status = 400, description = "Invalid date or week")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(payload): Json<GameDto>,
) -> Result<Json<UpdateResponse<GameDto>>, AppError> {
    payload.validate()?;
    let outcome = game_service::update_game(&state, id, payload).await?;
    Ok(Json(UpdateResponse::from_outcome(outcome, "Game")))
}

/// Delete a game. Unknown ids still report success.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "games",
    params(("id" = u32, Path, description = "Identifier of the game to delete")),
    responses((status = 200, description = "Game deleted", body = MessageResponse))
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, AppError> {
    game_service::delete_game(&state, id).await?;
    Ok(Json(MessageResponse::new("Game deleted")))
}
