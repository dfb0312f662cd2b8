/// Per-match stat accumulation helpers.
pub mod aggregation;
/// OpenAPI documentation generation.
pub mod documentation;
/// Zip export of every league document.
pub mod export_service;
/// Schedule entry management.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Match submission and stat aggregation.
pub mod match_service;
/// Player management.
pub mod player_service;
/// Team management and team schedules.
pub mod team_service;
/// Current-week singleton.
pub mod week_service;
