use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::core::{CsClient, CsError, net};

use super::{
    NO_BROADCASTER_INFO, ScheduledGame, TeamInfo,
    wire::{ScheduleEnvelope, WireGame, WireTeam},
};

/// Last word of a team name, lower-cased: `"Portland Trail Blazers"` → `"blazers"`.
pub(crate) fn last_word_key(name: &str) -> Option<String> {
    name.split_whitespace().last().map(str::to_lowercase)
}

fn plays_in(game: &WireGame, key: &str) -> bool {
    let side = |team: &Option<WireTeam>| {
        team.as_ref()
            .and_then(|t| t.team_name.as_deref())
            .and_then(last_word_key)
            .is_some_and(|k| k == key)
    };
    side(&game.home_team) || side(&game.away_team)
}

fn starts_at(game: &WireGame) -> Option<DateTime<Utc>> {
    let raw = game.game_date_time_utc.as_deref()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn team_info(team: Option<WireTeam>) -> TeamInfo {
    let team = team.unwrap_or(WireTeam {
        team_name: None,
        team_city: None,
        team_tricode: None,
    });
    TeamInfo {
        name: team.team_name.unwrap_or_default(),
        city: team.team_city.unwrap_or_default(),
        tricode: team.team_tricode.unwrap_or_default(),
    }
}

fn render(game: WireGame, at: DateTime<Utc>, tz: Tz) -> ScheduledGame {
    let local = at.with_timezone(&tz);
    let date = local.format("%-m/%-d/%Y").to_string();
    let time = local.format("%I:%M %p").to_string();

    let mut broadcasters: Vec<String> = game
        .broadcasters
        .map(|b| b.national_broadcasters)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|b| b.broadcaster_display)
        .filter(|name| !name.trim().is_empty())
        .collect();
    if broadcasters.is_empty() {
        broadcasters.push(NO_BROADCASTER_INFO.to_string());
    }

    ScheduledGame {
        game_id: game.game_id.unwrap_or_default(),
        local_time: format!("{date} {time}"),
        date,
        time,
        home_team: team_info(game.home_team),
        away_team: team_info(game.away_team),
        arena: game.arena_name.unwrap_or_default(),
        arena_city: game.arena_city.unwrap_or_default(),
        broadcasters,
        starts_at: at,
    }
}

/// Flatten, filter to `key`, keep games strictly after `now`, sort ascending, truncate.
pub(crate) fn select_upcoming(
    env: ScheduleEnvelope,
    key: &str,
    now: DateTime<Utc>,
    limit: usize,
    tz: Tz,
) -> Result<Vec<ScheduledGame>, CsError> {
    let dates = env
        .league_schedule
        .ok_or_else(|| CsError::MissingData("leagueSchedule missing".into()))?
        .game_dates
        .ok_or_else(|| CsError::MissingData("leagueSchedule.gameDates missing".into()))?;

    let mut upcoming: Vec<(DateTime<Utc>, WireGame)> = dates
        .into_iter()
        .flat_map(|d| d.games)
        .filter(|g| plays_in(g, key))
        .filter_map(|g| starts_at(&g).map(|at| (at, g)))
        .filter(|(at, _)| *at > now)
        .collect();

    upcoming.sort_by_key(|(at, _)| *at);
    upcoming.truncate(limit);

    Ok(upcoming
        .into_iter()
        .map(|(at, g)| render(g, at, tz))
        .collect())
}

pub(crate) async fn fetch_upcoming(
    client: &CsClient,
    key: &str,
    now: DateTime<Utc>,
    limit: usize,
) -> Result<Vec<ScheduledGame>, CsError> {
    let url = client.schedule_url().clone();
    let body = net::fetch_text(client, url, "schedule", "json").await?;
    let env: ScheduleEnvelope = serde_json::from_str(&body)?;
    let games = select_upcoming(env, key, now, limit, client.timezone())?;
    tracing::debug!(key, count = games.len(), "selected upcoming games");
    Ok(games)
}
