use crate::common;
use chrono::{Duration, TimeZone, Utc};
use courtside_rs::{ScheduleBuilder, SourcePreference};
use serde_json::{Value, json};

fn game(id: &str, at: chrono::DateTime<Utc>, home: Option<&str>, away: Option<&str>) -> Value {
    let team = |name: Option<&str>| match name {
        Some(n) => json!({ "teamName": n, "teamCity": "", "teamTricode": "" }),
        None => Value::Null,
    };
    json!({
        "gameId": id,
        "gameDateTimeUTC": at.to_rfc3339(),
        "arenaName": "Arena",
        "arenaCity": "City",
        "broadcasters": { "nationalBroadcasters": [] },
        "homeTeam": team(home),
        "awayTeam": team(away),
    })
}

#[tokio::test]
async fn lakers_schedule_keeps_only_future_lakers_games() {
    let t = Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap();
    let day = Duration::days(1);
    let body = json!({
        "leagueSchedule": {
            "gameDates": [
                { "games": [
                    game("past", t - day, Some("Lakers"), Some("Suns")),
                    game("at-now", t, Some("Lakers"), Some("Kings")),
                ]},
                { "games": [
                    game("t3", t + day * 3, Some("Trail Blazers"), Some("Lakers")),
                    game("t1", t + day, Some("Lakers"), Some("Raptors")),
                    game("celtics", t + day, Some("Celtics"), Some("Knicks")),
                    game("no-teams", t + day, None, None),
                ]},
                { "games": [
                    game("t2", t + day * 2, Some("Clippers"), Some("Lakers")),
                ]},
            ]
        }
    })
    .to_string();

    let server = common::setup_server();
    let _mock = common::mock_schedule(&server, 200, body);
    let client = common::client(&server, SourcePreference::default());

    let games = ScheduleBuilder::new(&client, "Lakers")
        .now(t)
        .fetch()
        .await
        .unwrap();

    let ids: Vec<&str> = games.iter().map(|g| g.game_id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
    assert_eq!(games[0].starts_at, t + day);
}

#[tokio::test]
async fn missing_game_dates_is_an_error() {
    let server = common::setup_server();
    let _mock = common::mock_schedule(
        &server,
        200,
        json!({ "leagueSchedule": { "seasonYear": "2024-25" } }).to_string(),
    );
    let client = common::client(&server, SourcePreference::default());

    assert!(
        ScheduleBuilder::new(&client, "Lakers")
            .fetch()
            .await
            .is_err()
    );
}
