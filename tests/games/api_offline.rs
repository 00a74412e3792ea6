use crate::common;
use courtside_rs::{CsError, GameLogBuilder, SourcePreference};

#[tokio::test]
async fn api_game_log_from_fixture() {
    let server = common::setup_server();
    let body = common::fixture("playergamelog", common::PLAYER_ID, "json");
    let mock = common::mock_player_game_log(&server, 200, body);
    let client = common::client(&server, SourcePreference::ApiOnly);

    let games = GameLogBuilder::new(&client).fetch().await.unwrap();
    mock.assert();

    assert_eq!(games.len(), 5);
    let dates: Vec<&str> = games.iter().map(|g| g.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["APR 11, 2025", "APR 09, 2025", "APR 06, 2025", "APR 04, 2025", "APR 01, 2025"]
    );

    let first = &games[0];
    assert_eq!(first.opponent, "HOU");
    assert!(first.home);
    assert_eq!(first.result, "W");
    assert_eq!(first.minutes_played, "34");
    assert_eq!(first.points, 27);
    assert_eq!(first.rebounds.total, 8);
    assert_eq!(first.plus_minus, Some(12));
    // Game score is derived from the box score: 27 points, 10/20 FG, 5/6 FT,
    // 1 OREB, 7 DREB, 1 STL, 9 AST, 1 BLK, 2 PF, 3 TOV.
    assert!((first.game_score - 23.6).abs() < 1e-9);

    let second = &games[1];
    assert_eq!(second.opponent, "OKC");
    assert!(!second.home);
    assert_eq!(second.plus_minus, Some(-9));

    assert_eq!(games[2].free_throws.attempted, 0);
    assert_eq!(games[2].free_throws.percentage, None);
}

#[tokio::test]
async fn api_game_log_missing_partition() {
    let server = common::setup_server();
    let _mock = common::mock_player_game_log(&server, 200, common::stats_body(vec![]));
    let client = common::client(&server, SourcePreference::ApiOnly);

    let err = GameLogBuilder::new(&client).fetch().await.unwrap_err();
    assert!(matches!(err, CsError::MissingData(_)), "got {err:?}");
}

#[tokio::test]
async fn api_game_log_is_fetched_fresh_and_identical() {
    let server = common::setup_server();
    let body = common::fixture("playergamelog", common::PLAYER_ID, "json");
    let mock = common::mock_player_game_log(&server, 200, body);
    let client = common::client(&server, SourcePreference::ApiOnly);

    let a = GameLogBuilder::new(&client).fetch().await.unwrap();
    let b = GameLogBuilder::new(&client).fetch().await.unwrap();

    mock.assert_calls(2);
    assert_eq!(a, b);
}
