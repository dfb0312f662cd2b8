//! Team routes, including per-team schedules.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::{
        common::{MessageResponse, UpdateResponse},
        game::GameDto,
        team::TeamDto,
    },
    error::AppError,
    services::team_service,
    state::SharedState,
};

/// Team CRUD routes plus per-team schedules.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/{id}", put(update_team).delete(delete_team))
        .route("/teams/{id}/schedule", get(team_schedule))
}

/// Create a team; the id is assigned when omitted.
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = TeamDto,
    responses((status = 200, description = "Team created", body = TeamDto))
)]
pub async fn create_team(
    State(state): State<SharedState>,
    Json(payload): Json<TeamDto>,
) -> Result<Json<TeamDto>, AppError> {
    Ok(Json(team_service::create_team(&state, payload).await?))
}

/// List every team.
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses((status = 200, description = "Teams in stored order", body = [TeamDto]))
)]
pub async fn list_teams(State(state): State<SharedState>) -> Json<Vec<TeamDto>> {
    Json(team_service::list_teams(&state).await)
}

/// Replace a team. An unknown id yields `{"error": "Team not found"}` with status 200.
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = u32, Path, description = "Identifier of the team to replace")),
    request_body = TeamDto,
    responses((status = 200, description = "Team replaced, or inline error body", body = TeamDto))
)]
pub async fn update_team(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
    Json(payload): Json<TeamDto>,
) -> Result<Json<UpdateResponse<TeamDto>>, AppError> {
    let outcome = team_service::update_team(&state, id, payload).await?;
    Ok(Json(UpdateResponse::from_outcome(outcome, "Team")))
}

/// Delete a team. Unknown ids still report success.
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = u32, Path, description = "Identifier of the team to delete")),
    responses((status = 200, description = "Team deleted", body = MessageResponse))
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Result<Json<MessageResponse>, AppError> {
    team_service::delete_team(&state, id).await?;
    Ok(Json(MessageResponse::new("Team deleted")))
}

/// Games in which the team plays on either side.
#[utoipa::path(
    get,
    path = "/teams/{id}/schedule",
    tag = "teams",
    params(("id" = u32, Path, description = "Identifier of the team")),
    responses((status = 200, description = "Team schedule", body = [GameDto]))
)]
pub async fn team_schedule(
    State(state): State<SharedState>,
    Path(id): Path<u32>,
) -> Json<Vec<GameDto>> {
    Json(team_service::team_schedule(&state, id).await)
}
