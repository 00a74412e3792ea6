//! `playercareerstats` path: totals-mode career splits.

use crate::core::{
    CsClient, CsError, net,
    wire::{Projection, ResultSet, StatsEnvelope},
};

use super::{CareerTotals, SeasonAggregate, SeasonLine};

pub(crate) const REGULAR_SEASON_SET: &str = "CareerTotalsRegularSeason";
pub(crate) const POST_SEASON_SET: &str = "CareerTotalsPostSeason";
pub(crate) const SEASON_TOTALS_SET: &str = "SeasonTotalsRegularSeason";

const AGGREGATE_COLUMNS: &[(&str, &str)] = &[
    ("PTS", "points"),
    ("REB", "rebounds"),
    ("AST", "assists"),
    ("STL", "steals"),
    ("BLK", "blocks"),
    ("GP", "games_played"),
    ("FG_PCT", "field_goal_percentage"),
    ("FG3_PCT", "three_point_percentage"),
    ("FT_PCT", "free_throw_percentage"),
    ("MIN", "minutes"),
];

const SEASON_COLUMNS: &[(&str, &str)] = &[
    ("SEASON_ID", "season_id"),
    ("TEAM_ABBREVIATION", "team_abbreviation"),
    ("PLAYER_AGE", "player_age"),
    ("GP", "games_played"),
    ("MIN", "minutes"),
    ("PTS", "points"),
    ("REB", "rebounds"),
    ("AST", "assists"),
    ("STL", "steals"),
    ("BLK", "blocks"),
];

async fn fetch_envelope(client: &CsClient) -> Result<StatsEnvelope, CsError> {
    let mut url = client.base_stats().join("playercareerstats")?;
    url.query_pairs_mut()
        .append_pair("LeagueID", "00")
        .append_pair("PerMode", "Totals")
        .append_pair("PlayerID", &client.player_id().to_string());

    let body = net::fetch_text(client, url, "playercareerstats", "json").await?;
    StatsEnvelope::parse(&body)
}

fn aggregate(set: &ResultSet) -> Result<SeasonAggregate, CsError> {
    let projection = Projection::new(set, AGGREGATE_COLUMNS)?;
    let row = projection.row(set.first_row()?)?;
    Ok(SeasonAggregate {
        points: row.u32("points")?,
        rebounds: row.u32("rebounds")?,
        assists: row.u32("assists")?,
        steals: row.u32("steals")?,
        blocks: row.u32("blocks")?,
        games_played: row.u32("games_played")?,
        field_goal_percentage: row.f64("field_goal_percentage")?,
        three_point_percentage: row.f64("three_point_percentage")?,
        free_throw_percentage: row.f64("free_throw_percentage")?,
        minutes: row.f64("minutes")?,
    })
}

pub(crate) fn totals_from_envelope(env: &StatsEnvelope) -> Result<CareerTotals, CsError> {
    // Both partitions are resolved before either is projected; no partial record.
    let regular = env.partition(REGULAR_SEASON_SET)?;
    let post = env.partition(POST_SEASON_SET)?;
    Ok(CareerTotals {
        regular_season: aggregate(regular)?,
        post_season: aggregate(post)?,
    })
}

pub(crate) fn seasons_from_envelope(env: &StatsEnvelope) -> Result<Vec<SeasonLine>, CsError> {
    let set = env.partition(SEASON_TOTALS_SET)?;
    let projection = Projection::new(set, SEASON_COLUMNS)?;
    set.row_set
        .iter()
        .map(|values| {
            let row = projection.row(values)?;
            Ok(SeasonLine {
                season_id: row.required_string("season_id")?,
                team_abbreviation: row.string("team_abbreviation")?.unwrap_or_default(),
                player_age: row.opt_f64("player_age")?,
                games_played: row.u32("games_played")?,
                minutes: row.f64("minutes")?,
                points: row.u32("points")?,
                rebounds: row.u32("rebounds")?,
                assists: row.u32("assists")?,
                steals: row.u32("steals")?,
                blocks: row.u32("blocks")?,
            })
        })
        .collect()
}

pub(crate) async fn fetch_career_totals(client: &CsClient) -> Result<CareerTotals, CsError> {
    let env = fetch_envelope(client).await?;
    totals_from_envelope(&env)
}

pub(crate) async fn fetch_season_totals(client: &CsClient) -> Result<Vec<SeasonLine>, CsError> {
    let env = fetch_envelope(client).await?;
    seasons_from_envelope(&env)
}
