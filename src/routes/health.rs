//! Liveness and storage health routes.

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::{common::MessageResponse, health::HealthResponse},
    services::health_service,
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "API is running", body = MessageResponse))
)]
/// Liveness message.
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new("Beer Die League API running"))
}

#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "health",
    responses((status = 200, description = "Storage status", body = HealthResponse))
)]
/// Return the current health status of the backend after checking the store.
pub async fn healthcheck(State(state): State<SharedState>) -> Json<HealthResponse> {
    let status = health_service::health_status(&state).await;
    Json(status)
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/", get(home))
        .route("/healthcheck", get(healthcheck))
}
