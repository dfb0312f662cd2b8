use utoipa::OpenApi;

/// OpenAPI document covering every league route.
#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the league API.
#[openapi(
    paths(
        crate::routes::health::home,
        crate::routes::health::healthcheck,
        crate::routes::week::get_current_week,
        crate::routes::week::set_current_week,
        crate::routes::export::export_data,
        crate::routes::players::create_player,
        crate::routes::players::list_players,
        crate::routes::players::update_player,
        crate::routes::players::delete_player,
        crate::routes::teams::create_team,
        crate::routes::teams::list_teams,
        crate::routes::teams::update_team,
        crate::routes::teams::delete_team,
        crate::routes::teams::team_schedule,
        crate::routes::games::create_game,
        crate::routes::games::list_games,
        crate::routes::games::update_game,
        crate::routes::games::delete_game,
        crate::routes::matches::submit_match,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::common::MessageResponse,
            crate::dto::common::InlineError,
            crate::dto::player::PlayerDto,
            crate::dto::team::TeamDto,
            crate::dto::game::GameDto,
            crate::dto::week::WeekValue,
            crate::dto::week::WeekUpdateRequest,
            crate::dto::week::WeekResponse,
            crate::dto::matches::PlayerGameStats,
            crate::dto::matches::GameStats,
            crate::dto::matches::MatchSubmission,
            crate::dto::matches::MatchSummary,
        )
    ),
    tags(
        (name = "health", description = "Liveness and storage health"),
        (name = "week", description = "Current league week"),
        (name = "export", description = "Backup export"),
        (name = "players", description = "Player management"),
        (name = "teams", description = "Team management and schedules"),
        (name = "games", description = "Schedule entries"),
        (name = "matches", description = "Match submission and stat aggregation"),
    )
)]
pub struct ApiDoc;
