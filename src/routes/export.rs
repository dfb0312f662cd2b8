//! Backup download route.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    error::AppError,
    services::export_service::{self, EXPORT_FILE_NAME},
    state::SharedState,
};

/// Backup export route.
pub fn router() -> Router<SharedState> {
    Router::new().route("/export-data", get(export_data))
}

/// Download every league document as a zip attachment.
#[utoipa::path(
    get,
    path = "/export-data",
    tag = "export",
    responses(
        (status = 200, description = "Zip archive (`beer_die_backup.zip`) of all league data")
    )
)]
pub async fn export_data(State(state): State<SharedState>) -> Result<Response, AppError> {
    let archive = export_service::export_archive(&state).await?;
    let disposition = format!("attachment; filename={EXPORT_FILE_NAME}");

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive,
    )
        .into_response())
}
