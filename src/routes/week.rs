//! Current-week routes.

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::week::{WeekResponse, WeekUpdateRequest},
    error::AppError,
    services::week_service,
    state::SharedState,
};

/// Current-week singleton routes.
pub fn router() -> Router<SharedState> {
    Router::new().route("/current-week", get(get_current_week).put(set_current_week))
}

#[utoipa::path(
    get,
    path = "/current-week",
    tag = "week",
    responses((status = 200, description = "Current week", body = WeekResponse))
)]
/// Return the current week number or `"preseason"`.
pub async fn get_current_week(State(state): State<SharedState>) -> Json<WeekResponse> {
    Json(week_service::current_week(&state).await)
}

#[utoipa::path(
    put,
    path = "/current-week",
    tag = "week",
    request_body = WeekUpdateRequest,
    responses(
        (status = 200, description = "Week updated", body = WeekResponse),
        (status = 400, description = "Week outside 1-14 or unknown label")
    )
)]
/// Set the current week to a number in 1-14 or `"preseason"`.
pub async fn set_current_week(
    State(state): State<SharedState>,
    Json(payload): Json<WeekUpdateRequest>,
) -> Result<Json<WeekResponse>, AppError> {
    Ok(Json(week_service::set_current_week(&state, payload).await?))
}
