use crate::common;
use courtside_rs::{CsError, GameLogBuilder, SourcePreference, games};

fn interleaved_page() -> String {
    let mut rows = vec![common::header_row()];
    for n in 1..=3 {
        rows.push(common::game_row(n, n % 2 == 0, "BOS"));
    }
    rows.push(common::inactive_row(4));
    rows.push(common::header_row());
    for n in 5..=9 {
        rows.push(common::game_row(n, n % 2 == 0, "DEN"));
    }
    common::gamelog_page(&rows)
}

#[tokio::test]
async fn only_full_width_rows_are_games() {
    let server = common::setup_server();
    let mock = common::mock_gamelog_page(&server, 200, interleaved_page());
    let client = common::client(&server, SourcePreference::MarkupOnly);

    let games = GameLogBuilder::new(&client).fetch().await.unwrap();
    mock.assert();

    assert_eq!(games.len(), games::DEFAULT_GAME_LIMIT);
    // Document order is kept: rows 1, 2, 3, then 5, 6 (4 is inactive).
    let points: Vec<u32> = games.iter().map(|g| g.points).collect();
    assert_eq!(points, vec![21, 22, 23, 25, 26]);
    assert_eq!(games[0].date, "2025-01-29");
    assert_eq!(games[3].opponent, "DEN");
}

#[tokio::test]
async fn limit_is_respected() {
    let server = common::setup_server();
    let _mock = common::mock_gamelog_page(&server, 200, interleaved_page());
    let client = common::client(&server, SourcePreference::MarkupOnly);

    let games = GameLogBuilder::new(&client).limit(2).fetch().await.unwrap();
    assert_eq!(games.len(), 2);

    let all = GameLogBuilder::new(&client).limit(50).fetch().await.unwrap();
    assert_eq!(all.len(), 8);
}

#[tokio::test]
async fn markup_game_log_is_fetched_fresh_and_identical() {
    let server = common::setup_server();
    let mock = common::mock_gamelog_page(&server, 200, interleaved_page());
    let client = common::client(&server, SourcePreference::MarkupOnly);

    let a = GameLogBuilder::new(&client).fetch().await.unwrap();
    let b = GameLogBuilder::new(&client).fetch().await.unwrap();

    mock.assert_calls(2);
    assert_eq!(a, b);
}

#[test]
fn data_row_fields() {
    let page = common::gamelog_page(&[common::game_row(1, true, "BOS")]);
    let games = games::parse_game_log_html(&page, 5).unwrap();
    let g = &games[0];

    assert_eq!(g.date, "2025-01-29");
    assert_eq!(g.opponent, "BOS");
    assert!(!g.home);
    assert_eq!(g.result, "W (+5)");
    assert_eq!(g.minutes_played, "35:12");
    assert_eq!(g.field_goals.made, 10);
    assert_eq!(g.field_goals.attempted, 20);
    assert_eq!(g.field_goals.percentage, Some(0.5));
    assert_eq!(g.three_pointers.made, 2);
    assert_eq!(g.three_pointers.attempted, 6);
    assert_eq!(g.free_throws.made, 5);
    assert_eq!(g.free_throws.attempted, 6);
    assert_eq!(g.rebounds.offensive, 1);
    assert_eq!(g.rebounds.defensive, 7);
    assert_eq!(g.rebounds.total, 8);
    assert_eq!(g.assists, 9);
    assert_eq!(g.steals, 1);
    assert_eq!(g.blocks, 1);
    assert_eq!(g.turnovers, 3);
    assert_eq!(g.fouls, 2);
    assert_eq!(g.points, 21);
    assert!((g.game_score - 21.4).abs() < 1e-9);
    assert_eq!(g.plus_minus, Some(5));
}

#[test]
fn home_game_has_no_marker() {
    let page = common::gamelog_page(&[common::game_row(2, false, "PHX")]);
    let games = games::parse_game_log_html(&page, 5).unwrap();
    assert!(games[0].home);
}

#[test]
fn empty_percentage_and_margin_cells_are_absent() {
    let row = common::game_row(1, false, "MIA")
        .replace("<td>.333</td>", "<td></td>")
        .replace("<td>+5</td>", "<td></td>");
    let page = common::gamelog_page(&[row]);

    let games = games::parse_game_log_html(&page, 5).unwrap();
    assert_eq!(games[0].three_pointers.percentage, None);
    assert_eq!(games[0].plus_minus, None);
    assert_eq!(games[0].field_goals.percentage, Some(0.5));
}

#[test]
fn negative_margin() {
    let row = common::game_row(1, false, "MIA").replace("<td>+5</td>", "<td>-7</td>");
    let games = games::parse_game_log_html(&common::gamelog_page(&[row]), 5).unwrap();
    assert_eq!(games[0].plus_minus, Some(-7));
}

#[test]
fn malformed_count_fails_the_batch() {
    let bad = common::game_row(2, false, "MIA").replace("<td>9</td>", "<td>nine</td>");
    let page = common::gamelog_page(&[common::game_row(1, false, "BOS"), bad]);

    let err = games::parse_game_log_html(&page, 5).unwrap_err();
    assert!(matches!(err, CsError::Data(_)), "got {err:?}");
}

#[test]
fn page_without_data_rows_is_empty() {
    let page = common::gamelog_page(&[common::header_row(), common::inactive_row(1)]);
    assert!(games::parse_game_log_html(&page, 5).unwrap().is_empty());
}

#[test]
fn nested_table_cells_do_not_widen_a_row() {
    // A 25-cell row whose last cell holds a nested table must not count as data.
    let row = format!(
        "<tr><th>1</th>{}<td><table><tr><td>x</td></tr></table></td></tr>",
        "<td>0</td>".repeat(23)
    );
    let page = common::gamelog_page(&[row]);
    assert!(games::parse_game_log_html(&page, 5).unwrap().is_empty());
}
