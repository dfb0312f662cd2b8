//! HTTP surface of the league API.

use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod export;
pub mod games;
pub mod health;
pub mod matches;
pub mod players;
pub mod teams;
pub mod week;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    health::router()
        .merge(week::router())
        .merge(export::router())
        .merge(players::router())
        .merge(teams::router())
        .merge(games::router())
        .merge(matches::router())
        .merge(docs::router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{io, io::Cursor, sync::Arc};

    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use futures::future::BoxFuture;
    use serde_json::{Value, json};
    use tempfile::{TempDir, tempdir};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        dao::{
            league_store::{
                LeagueStore,
                json::{JsonFileStore, JsonStoreConfig},
            },
            models::{GameEntity, LeagueSnapshot, PlayerEntity, TeamEntity},
            storage::{StorageError, StorageResult},
        },
        state::{AppState, week::Week},
    };

    /// Store that starts empty and refuses every write.
    struct ReadOnlyStore;

    fn refused(document: &str) -> BoxFuture<'static, StorageResult<()>> {
        let err = StorageError::save_failed(document, io::Error::other("disk full"));
        Box::pin(async move { Err(err) })
    }

    impl LeagueStore for ReadOnlyStore {
        fn load(&self) -> BoxFuture<'static, StorageResult<LeagueSnapshot>> {
            Box::pin(async { Ok(LeagueSnapshot::default()) })
        }

        fn save_players(&self, _: Vec<PlayerEntity>) -> BoxFuture<'static, StorageResult<()>> {
            refused("players.json")
        }

        fn save_teams(&self, _: Vec<TeamEntity>) -> BoxFuture<'static, StorageResult<()>> {
            refused("teams.json")
        }

        fn save_games(&self, _: Vec<GameEntity>) -> BoxFuture<'static, StorageResult<()>> {
            refused("games.json")
        }

        fn save_current_week(&self, _: Week) -> BoxFuture<'static, StorageResult<()>> {
            refused("current_week.json")
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async {
                Err(StorageError::unavailable(
                    "read-only".into(),
                    io::Error::other("disk full"),
                ))
            })
        }
    }

    async fn app() -> (Router, TempDir) {
        let temp_dir = tempdir().unwrap();
        let store = JsonFileStore::new(JsonStoreConfig::new(temp_dir.path()));
        (app_with(Arc::new(store)).await, temp_dir)
    }

    async fn app_with(store: Arc<dyn LeagueStore>) -> Router {
        let state = AppState::load(store).await.unwrap();
        router(state)
    }

    async fn call(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn seed_match_fixture(app: &Router) {
        for id in 1..=6 {
            call(
                app,
                Method::POST,
                "/players",
                Some(json!({"id": id, "name": format!("p{id}"), "rank": id})),
            )
            .await;
        }
        call(
            app,
            Method::POST,
            "/teams",
            Some(json!({"name": "A", "player1_id": 1, "player2_id": 2, "player3_id": 3})),
        )
        .await;
        call(
            app,
            Method::POST,
            "/teams",
            Some(json!({"name": "B", "player1_id": 4, "player2_id": 5, "player3_id": 6})),
        )
        .await;
    }

    fn game_body(team_a: u32, team_b: u32, week: Value) -> Value {
        json!({
            "team_a_id": team_a,
            "team_b_id": team_b,
            "score_a": 21,
            "score_b": 15,
            "date": "2025-09-14",
            "week": week
        })
    }

    fn match_body(winner_id: u32, points: u32) -> Value {
        json!({
            "team_a_id": 1,
            "team_b_id": 2,
            "num_games": 1,
            "games": [{
                "team_a_players": [{"player_id": 1, "points": points}],
                "team_b_players": [{"player_id": 99, "points": 7}]
            }],
            "winner_id": winner_id
        })
    }

    #[tokio::test]
    async fn home_reports_running() {
        let (app, _dir) = app().await;
        let (status, body) = call(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Beer Die League API running"}));

        let (status, body) = call(&app, Method::GET, "/healthcheck", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn current_week_validation() {
        let (app, dir) = app().await;

        let (status, body) = call(&app, Method::GET, "/current-week", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"week": 1}));

        let (status, body) =
            call(&app, Method::PUT, "/current-week", Some(json!({"week": 15}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Week must be between 1 and 14"}));

        let (status, body) = call(
            &app,
            Method::PUT,
            "/current-week",
            Some(json!({"week": "offseason"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"detail": "Week must be preseason or between 1 and 14"})
        );

        let (status, body) = call(
            &app,
            Method::PUT,
            "/current-week",
            Some(json!({"week": "preseason"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"week": "preseason"}));

        let (_, body) = call(&app, Method::GET, "/current-week", None).await;
        assert_eq!(body, json!({"week": "preseason"}));

        // Weeks may move backwards.
        call(&app, Method::PUT, "/current-week", Some(json!({"week": 9}))).await;
        let (status, _) =
            call(&app, Method::PUT, "/current-week", Some(json!({"week": 2}))).await;
        assert_eq!(status, StatusCode::OK);

        let stored = std::fs::read_to_string(dir.path().join("current_week.json")).unwrap();
        assert_eq!(stored, "{\n  \"week\": 2\n}");
    }

    #[tokio::test]
    async fn non_integer_weeks_are_bad_requests() {
        let (app, _dir) = app().await;

        for week in [json!(4.0), json!(2.5), json!(u64::MAX), json!(-1)] {
            let (status, body) =
                call(&app, Method::PUT, "/current-week", Some(json!({"week": week}))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "week {week}");
            assert_eq!(body, json!({"detail": "Week must be between 1 and 14"}));
        }

        let (_, body) = call(&app, Method::GET, "/current-week", None).await;
        assert_eq!(body, json!({"week": 1}));
    }

    #[tokio::test]
    async fn player_ids_are_assigned_sequentially() {
        let (app, _dir) = app().await;

        let (_, first) = call(
            &app,
            Method::POST,
            "/players",
            Some(json!({"name": "Ann", "rank": 2})),
        )
        .await;
        let (_, second) = call(
            &app,
            Method::POST,
            "/players",
            Some(json!({"name": "Ben", "rank": 1})),
        )
        .await;
        assert_eq!(first["id"], 1);
        assert_eq!(first["points"], 0);
        assert_eq!(second["id"], 2);

        call(
            &app,
            Method::POST,
            "/players",
            Some(json!({"id": 5, "name": "Cy", "rank": 3})),
        )
        .await;
        let (_, next) = call(
            &app,
            Method::POST,
            "/players",
            Some(json!({"name": "Di", "rank": 4})),
        )
        .await;
        assert_eq!(next["id"], 6);
    }

    #[tokio::test]
    async fn players_listed_by_rank() {
        let (app, _dir) = app().await;
        for (name, rank) in [("c", 3), ("a", 1), ("b", 2)] {
            call(
                &app,
                Method::POST,
                "/players",
                Some(json!({"name": name, "rank": rank})),
            )
            .await;
        }

        let (status, body) = call(&app, Method::GET, "/players", None).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|player| player["name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_missing_returns_inline_error() {
        let (app, _dir) = app().await;

        let (status, body) = call(
            &app,
            Method::PUT,
            "/players/42",
            Some(json!({"name": "Ghost", "rank": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "Player not found"}));

        let (status, body) = call(
            &app,
            Method::PUT,
            "/teams/42",
            Some(json!({"name": "T", "player1_id": 1, "player2_id": 2, "player3_id": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "Team not found"}));
    }

    #[tokio::test]
    async fn update_overwrites_whole_record() {
        let (app, _dir) = app().await;
        call(
            &app,
            Method::POST,
            "/players",
            Some(json!({"name": "Ann", "rank": 2, "points": 9})),
        )
        .await;

        let (status, body) = call(
            &app,
            Method::PUT,
            "/players/1",
            Some(json!({"id": 1, "name": "Ann B", "rank": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ann B");
        assert_eq!(body["points"], 0);
        let (_, listed) = call(&app, Method::GET, "/players", None).await;
        assert_eq!(listed[0]["points"], 0);
    }

    #[tokio::test]
    async fn delete_unknown_player_still_succeeds() {
        let (app, dir) = app().await;
        call(
            &app,
            Method::POST,
            "/players",
            Some(json!({"name": "Ann", "rank": 1})),
        )
        .await;

        let (status, body) = call(&app, Method::DELETE, "/players/77", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Player deleted"}));

        let (_, body) = call(&app, Method::DELETE, "/players/1", None).await;
        assert_eq!(body, json!({"message": "Player deleted"}));
        let stored = std::fs::read_to_string(dir.path().join("players.json")).unwrap();
        assert_eq!(stored, "[]");
    }

    #[tokio::test]
    async fn teams_can_be_deleted() {
        let (app, dir) = app().await;
        seed_match_fixture(&app).await;

        let (status, body) = call(&app, Method::DELETE, "/teams/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Team deleted"}));

        let (_, teams) = call(&app, Method::GET, "/teams", None).await;
        let ids: Vec<_> = teams
            .as_array()
            .unwrap()
            .iter()
            .map(|team| team["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2]);

        let (status, body) = call(&app, Method::DELETE, "/teams/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Team deleted"}));

        let stored: Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("teams.json")).unwrap())
                .unwrap();
        assert_eq!(stored.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn games_are_validated_and_scheduled() {
        let (app, _dir) = app().await;

        for week in [json!(15), json!(0), json!(300), json!(-1)] {
            let body_in = game_body(1, 2, week.clone());
            let (status, body) = call(&app, Method::POST, "/games", Some(body_in)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "week {week}");
            let detail = body["detail"].as_str().unwrap().to_lowercase();
            assert!(detail.contains("week"), "{detail}");
        }

        let mut bad_date = game_body(1, 2, json!(2));
        bad_date["date"] = json!("2025-13-01");
        let (status, _) = call(&app, Method::POST, "/games", Some(bad_date)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        for (a, b) in [(1, 2), (3, 1), (2, 3)] {
            let (status, _) =
                call(&app, Method::POST, "/games", Some(game_body(a, b, json!(2)))).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, schedule) = call(&app, Method::GET, "/teams/1/schedule", None).await;
        let ids: Vec<_> = schedule
            .as_array()
            .unwrap()
            .iter()
            .map(|game| game["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);

        let (_, games) = call(&app, Method::GET, "/games", None).await;
        assert_eq!(games.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn games_can_be_replaced_and_deleted() {
        let (app, dir) = app().await;
        call(&app, Method::POST, "/games", Some(game_body(1, 2, json!(3)))).await;

        let mut replacement = game_body(1, 2, json!(4));
        replacement["id"] = json!(1);
        replacement["score_a"] = json!(11);
        let (status, body) =
            call(&app, Method::PUT, "/games/1", Some(replacement.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["week"], 4);
        assert_eq!(body["score_a"], 11);

        let (status, body) = call(&app, Method::PUT, "/games/9", Some(replacement)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"error": "Game not found"}));

        let (status, _) =
            call(&app, Method::PUT, "/games/1", Some(game_body(1, 2, json!(300)))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, games) = call(&app, Method::GET, "/games", None).await;
        assert_eq!(games[0]["week"], 4);

        let (status, body) = call(&app, Method::DELETE, "/games/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Game deleted"}));
        let (status, body) = call(&app, Method::DELETE, "/games/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Game deleted"}));

        let stored = std::fs::read_to_string(dir.path().join("games.json")).unwrap();
        assert_eq!(stored, "[]");
    }

    #[tokio::test]
    async fn match_submission_updates_stats_and_records() {
        let (app, dir) = app().await;
        seed_match_fixture(&app).await;

        let (status, body) = call(&app, Method::POST, "/matches", Some(match_body(1, 3))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Match submitted successfully",
                "players_updated": 6,
                "teams_updated": 2
            })
        );

        let (_, players) = call(&app, Method::GET, "/players", None).await;
        assert_eq!(players[0]["points"], 3);
        assert_eq!(players[1]["points"], 0);
        let (_, teams) = call(&app, Method::GET, "/teams", None).await;
        assert_eq!((&teams[0]["wins"], &teams[0]["losses"]), (&json!(1), &json!(0)));
        assert_eq!((&teams[1]["wins"], &teams[1]["losses"]), (&json!(0), &json!(1)));

        // Resubmitting double counts.
        call(&app, Method::POST, "/matches", Some(match_body(1, 3))).await;
        let (_, players) = call(&app, Method::GET, "/players", None).await;
        assert_eq!(players[0]["points"], 6);
        let (_, teams) = call(&app, Method::GET, "/teams", None).await;
        assert_eq!(teams[0]["wins"], 2);
        assert_eq!(teams[1]["losses"], 2);

        let stored: Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("teams.json")).unwrap())
                .unwrap();
        assert_eq!(stored[0]["wins"], 2);
    }

    #[tokio::test]
    async fn match_submission_errors() {
        let (app, _dir) = app().await;
        seed_match_fixture(&app).await;

        let mut unknown_team = match_body(1, 3);
        unknown_team["team_b_id"] = json!(9);
        let (status, body) = call(&app, Method::POST, "/matches", Some(unknown_team)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "One or both teams not found"}));

        let (status, body) = call(&app, Method::POST, "/matches", Some(match_body(3, 3))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"detail": "Winner ID must be one of the participating teams"})
        );

        let (_, teams) = call(&app, Method::GET, "/teams", None).await;
        assert_eq!(teams[0]["wins"], 0);
        assert_eq!(teams[1]["wins"], 0);
        let (_, players) = call(&app, Method::GET, "/players", None).await;
        assert_eq!(players[0]["points"], 0);
    }

    #[tokio::test]
    async fn failed_writes_keep_memory_authoritative() {
        let app = app_with(Arc::new(ReadOnlyStore)).await;
        seed_match_fixture(&app).await;

        let (status, body) = call(
            &app,
            Method::POST,
            "/players",
            Some(json!({"name": "Ann", "rank": 7})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 7);

        let (_, players) = call(&app, Method::GET, "/players", None).await;
        assert_eq!(players.as_array().unwrap().len(), 7);
        assert_eq!(players[6]["name"], "Ann");

        let (status, body) = call(&app, Method::POST, "/matches", Some(match_body(1, 3))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["players_updated"], 6);

        let (_, teams) = call(&app, Method::GET, "/teams", None).await;
        assert_eq!(teams[0]["wins"], 1);
        assert_eq!(teams[1]["losses"], 1);
        let (_, players) = call(&app, Method::GET, "/players", None).await;
        assert_eq!(players[0]["name"], "p1");
        assert_eq!(players[0]["points"], 3);

        let (status, body) =
            call(&app, Method::PUT, "/current-week", Some(json!({"week": 5}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"week": 5}));
        let (_, body) = call(&app, Method::GET, "/current-week", None).await;
        assert_eq!(body, json!({"week": 5}));

        let (status, body) = call(&app, Method::GET, "/healthcheck", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "degraded"}));
    }

    #[tokio::test]
    async fn export_returns_zip_attachment() {
        let (app, _dir) = app().await;
        seed_match_fixture(&app).await;

        let request = Request::builder()
            .uri("/export-data")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/zip"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=beer_die_backup.zip"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut names: Vec<_> = archive.file_names().map(str::to_owned).collect();
        names.sort();
        assert_eq!(
            names,
            vec!["current_week.json", "games.json", "players.json", "teams.json"]
        );
        assert!(archive.by_name("players.json").unwrap().size() > 0);
    }
}
