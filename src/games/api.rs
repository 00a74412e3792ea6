//! `playergamelog` API path.

use crate::core::{
    CsClient, CsError, GameLogSource, SourceFuture, net,
    wire::{Projection, StatsEnvelope},
};

use super::{GameLogEntry, Rebounds, ShootingSplit};

const GAME_LOG_SET: &str = "PlayerGameLog";

const GAME_LOG_COLUMNS: &[(&str, &str)] = &[
    ("GAME_DATE", "date"),
    ("MATCHUP", "matchup"),
    ("WL", "wl"),
    ("MIN", "min"),
    ("FGM", "fgm"),
    ("FGA", "fga"),
    ("FG_PCT", "fg_pct"),
    ("FG3M", "fg3m"),
    ("FG3A", "fg3a"),
    ("FG3_PCT", "fg3_pct"),
    ("FTM", "ftm"),
    ("FTA", "fta"),
    ("FT_PCT", "ft_pct"),
    ("OREB", "oreb"),
    ("DREB", "dreb"),
    ("REB", "reb"),
    ("AST", "ast"),
    ("STL", "stl"),
    ("BLK", "blk"),
    ("TOV", "tov"),
    ("PF", "pf"),
    ("PTS", "pts"),
    ("PLUS_MINUS", "plus_minus"),
];

/// Reads the recent games from the stats API's `playergamelog` endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiGameLog;

impl GameLogSource for ApiGameLog {
    fn name(&self) -> &'static str {
        "api"
    }

    fn load_games<'a>(
        &'a self,
        client: &'a CsClient,
        limit: usize,
    ) -> SourceFuture<'a, Vec<GameLogEntry>> {
        Box::pin(async move {
            let mut url = client.base_stats().join("playergamelog")?;
            url.query_pairs_mut()
                .append_pair("PlayerID", &client.player_id().to_string())
                .append_pair("Season", client.season())
                .append_pair("SeasonType", "Regular Season");

            let body = net::fetch_text(client, url, "playergamelog", "json").await?;
            let env = StatsEnvelope::parse(&body)?;
            games_from_envelope(&env, limit)
        })
    }
}

/// `"LAL vs. BOS"` → (`BOS`, home); `"LAL @ BOS"` → (`BOS`, away).
pub(crate) fn split_matchup(matchup: &str) -> (String, bool) {
    if let Some((_, opp)) = matchup.split_once(" @ ") {
        (opp.trim().to_string(), false)
    } else if let Some((_, opp)) = matchup.split_once(" vs. ") {
        (opp.trim().to_string(), true)
    } else {
        (matchup.trim().to_string(), true)
    }
}

pub(crate) fn games_from_envelope(
    env: &StatsEnvelope,
    limit: usize,
) -> Result<Vec<GameLogEntry>, CsError> {
    let set = env.partition(GAME_LOG_SET)?;
    let projection = Projection::new(set, GAME_LOG_COLUMNS)?;

    set.row_set
        .iter()
        .take(limit)
        .map(|values| {
            let row = projection.row(values)?;
            let matchup = row.required_string("matchup")?;
            let (opponent, home) = split_matchup(&matchup);

            let mut entry = GameLogEntry {
                date: row.required_string("date")?,
                opponent,
                home,
                result: row.string("wl")?.unwrap_or_default(),
                minutes_played: row.string("min")?.unwrap_or_default(),
                field_goals: ShootingSplit {
                    made: row.u32("fgm")?,
                    attempted: row.u32("fga")?,
                    percentage: row.opt_f64("fg_pct")?,
                },
                three_pointers: ShootingSplit {
                    made: row.u32("fg3m")?,
                    attempted: row.u32("fg3a")?,
                    percentage: row.opt_f64("fg3_pct")?,
                },
                free_throws: ShootingSplit {
                    made: row.u32("ftm")?,
                    attempted: row.u32("fta")?,
                    percentage: row.opt_f64("ft_pct")?,
                },
                rebounds: Rebounds {
                    offensive: row.u32("oreb")?,
                    defensive: row.u32("dreb")?,
                    total: row.u32("reb")?,
                },
                assists: row.u32("ast")?,
                steals: row.u32("stl")?,
                blocks: row.u32("blk")?,
                turnovers: row.u32("tov")?,
                fouls: row.u32("pf")?,
                points: row.u32("pts")?,
                game_score: 0.0,
                plus_minus: row.opt_i32("plus_minus")?,
            };
            // The API does not publish game score.
            entry.game_score = entry.compute_game_score();
            Ok(entry)
        })
        .collect()
}
