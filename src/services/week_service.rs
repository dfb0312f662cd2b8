use tracing::info;

use crate::{
    dto::week::{WeekResponse, WeekUpdateRequest},
    error::ServiceError,
    state::{Changes, SharedState, week::Week},
};

/// Current scheduling phase.
pub async fn current_week(state: &SharedState) -> WeekResponse {
    state.read_league(|league| league.current_week.into()).await
}

/// Set the current week. Any valid week may follow any other.
pub async fn set_current_week(
    state: &SharedState,
    request: WeekUpdateRequest,
) -> Result<WeekResponse, ServiceError> {
    let week = Week::try_from(request.week)?;

    state
        .with_league_mut(|league| {
            league.current_week = week;
            Ok::<_, ServiceError>(((), Changes::CURRENT_WEEK))
        })
        .await?;

    info!(%week, "current week updated");
    Ok(week.into())
}
