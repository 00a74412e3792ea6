#![allow(dead_code)]

use courtside_rs::{CsClient, SourcePreference};
use httpmock::{Method::GET, Mock, MockServer};
use serde_json::{Value, json};
use std::{fs, path::Path};
use url::Url;

pub const PLAYER_ID: &str = "2544";
pub const PROFILE_PATH: &str = "/players/j/jamesle01.html";
pub const GAMELOG_PATH: &str = "/players/j/jamesle01/gamelog/2025";
pub const SCHEDULE_PATH: &str = "/static/json/staticData/scheduleLeagueV2.json";

pub fn setup_server() -> MockServer {
    init_tracing();
    MockServer::start()
}

/// Installs a test subscriber once; `RUST_LOG=courtside_rs=debug` shows request logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("CS_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("CS_RECORD").ok().as_deref() == Some("1")
}

pub fn fixture(endpoint: &str, subject: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{subject}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client with every endpoint pointed at `server`.
pub fn client(server: &MockServer, pref: SourcePreference) -> CsClient {
    let base = server.base_url();
    CsClient::builder()
        .base_stats(Url::parse(&format!("{base}/stats/")).unwrap())
        .profile_page(Url::parse(&format!("{base}{PROFILE_PATH}")).unwrap())
        .gamelog_page(Url::parse(&format!("{base}{GAMELOG_PATH}")).unwrap())
        .schedule_url(Url::parse(&format!("{base}{SCHEDULE_PATH}")).unwrap())
        .source_preference(pref)
        .build()
        .unwrap()
}

/* ---------------- stats API bodies ---------------- */

pub const CAREER_HEADERS: [&str; 24] = [
    "PLAYER_ID", "LEAGUE_ID", "Team_ID", "GP", "GS", "MIN", "FGM", "FGA", "FG_PCT", "FG3M",
    "FG3A", "FG3_PCT", "FTM", "FTA", "FT_PCT", "OREB", "DREB", "REB", "AST", "STL", "BLK",
    "TOV", "PF", "PTS",
];

pub fn regular_season_row() -> Value {
    json!([
        2544, "00", 0, 1492, 1491, 57446.0, 14837, 28677, 0.505, 2410, 6932, 0.348, 8311,
        11005, 0.755, 1685, 9685, 11370, 10882, 2263, 1111, 5182, 2680, 40474
    ])
}

pub fn post_season_row() -> Value {
    json!([
        2544, "00", 0, 287, 287, 12093.0, 3897, 7881, 0.494, 598, 1806, 0.331, 2136, 2879,
        0.742, 428, 2186, 2614, 2067, 492, 288, 1013, 690, 8289
    ])
}

pub fn result_set(name: &str, headers: &[&str], rows: Vec<Value>) -> Value {
    json!({ "name": name, "headers": headers, "rowSet": rows })
}

pub fn stats_body(sets: Vec<Value>) -> String {
    json!({ "resource": "test", "parameters": {}, "resultSets": sets }).to_string()
}

pub fn career_body(include_regular: bool, include_post: bool) -> String {
    let mut sets = vec![result_set(
        "SeasonTotalsRegularSeason",
        &CAREER_HEADERS,
        vec![],
    )];
    if include_regular {
        sets.push(result_set(
            "CareerTotalsRegularSeason",
            &CAREER_HEADERS,
            vec![regular_season_row()],
        ));
    }
    if include_post {
        sets.push(result_set(
            "CareerTotalsPostSeason",
            &CAREER_HEADERS,
            vec![post_season_row()],
        ));
    }
    stats_body(sets)
}

pub fn mock_career<'a>(server: &'a MockServer, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/stats/playercareerstats")
            .query_param("LeagueID", "00")
            .query_param("PerMode", "Totals")
            .query_param("PlayerID", PLAYER_ID);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_player_info<'a>(server: &'a MockServer, status: u16, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/stats/commonplayerinfo")
            .query_param("PlayerID", PLAYER_ID);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_player_game_log<'a>(server: &'a MockServer, status: u16, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/stats/playergamelog")
            .query_param("PlayerID", PLAYER_ID)
            .query_param("Season", "2024-25")
            .query_param("SeasonType", "Regular Season");
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_profile_page<'a>(server: &'a MockServer, status: u16, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(PROFILE_PATH);
        then.status(status)
            .header("content-type", "text/html")
            .body(body);
    })
}

pub fn mock_gamelog_page<'a>(server: &'a MockServer, status: u16, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(GAMELOG_PATH);
        then.status(status)
            .header("content-type", "text/html")
            .body(body);
    })
}

pub fn mock_schedule<'a>(server: &'a MockServer, status: u16, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(SCHEDULE_PATH);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

/* ---------------- game-log markup ---------------- */

/// A 26-cell data row. `n` varies date, opponent and points so rows are distinguishable.
pub fn game_row(n: u32, away: bool, opponent: &str) -> String {
    let marker = if away { "@" } else { "" };
    let points = 20 + n;
    format!(
        "<tr><th>{n}</th><td>2025-01-{day:02}</td><td>{marker}</td><td>{opponent}</td>\
         <td>W (+5)</td><td>35:12</td><td>10</td><td>20</td><td>.500</td><td>2</td><td>6</td>\
         <td>.333</td><td>5</td><td>6</td><td>.833</td><td>1</td><td>7</td><td>8</td><td>9</td>\
         <td>1</td><td>1</td><td>3</td><td>2</td><td>{points}</td><td>21.4</td><td>+5</td></tr>",
        day = 30 - n,
    )
}

pub fn header_row() -> String {
    "<tr class=\"thead\"><th>Rk</th><th>Date</th><th></th><th>Opp</th><th>Result</th>\
     <th>MP</th><th>FG</th><th>FGA</th><th>FG%</th><th>PTS</th></tr>"
        .to_string()
}

pub fn inactive_row(n: u32) -> String {
    format!(
        "<tr><th>{n}</th><td>2025-01-0{n}</td><td>@</td><td>BOS</td><td>L (-3)</td>\
         <td colspan=\"21\">Inactive</td></tr>"
    )
}

pub fn gamelog_page(rows: &[String]) -> String {
    format!(
        "<!doctype html><html><body><table id=\"pgl_basic\"><tbody>{}</tbody></table></body></html>",
        rows.concat()
    )
}
