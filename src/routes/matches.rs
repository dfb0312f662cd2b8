//! Match submission route.

use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::matches::{MatchSubmission, MatchSummary},
    error::AppError,
    services::match_service,
    state::SharedState,
};

/// Match submission route.
pub fn router() -> Router<SharedState> {
    Router::new().route("/matches", post(submit_match))
}

/// Apply a played match to player stats and team records.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = MatchSubmission,
    responses(
        (status = 200, description = "Match applied", body = MatchSummary),
        (status = 400, description = "Winner is not one of the two teams"),
        (status = 404, description = "One or both teams not found")
    )
)]
pub async fn submit_match(
    State(state): State<SharedState>,
    Json(payload): Json<MatchSubmission>,
) -> Result<Json<MatchSummary>, AppError> {
    Ok(Json(match_service::submit_match(&state, payload).await?))
}
