//! `commonplayerinfo` API path for profiles.

use crate::core::{
    CsClient, CsError, ProfileSource, SourceFuture, net,
    wire::{Projection, StatsEnvelope},
};

use chrono::Utc;

use super::{HeadlineStats, PlayerProfile, UNDRAFTED, UNKNOWN, age_on};

const INFO_SET: &str = "CommonPlayerInfo";
const HEADLINE_SET: &str = "PlayerHeadlineStats";

const INFO_COLUMNS: &[(&str, &str)] = &[
    ("FIRST_NAME", "first_name"),
    ("LAST_NAME", "last_name"),
    ("TEAM_NAME", "team_name"),
    ("TEAM_CITY", "team_city"),
    ("JERSEY", "jersey"),
    ("POSITION", "position"),
    ("HEIGHT", "height"),
    ("WEIGHT", "weight"),
    ("COUNTRY", "country"),
    ("LAST_AFFILIATION", "last_affiliation"),
    ("BIRTHDATE", "birthdate"),
    ("DRAFT_YEAR", "draft_year"),
    ("DRAFT_ROUND", "draft_round"),
    ("DRAFT_NUMBER", "draft_number"),
    ("SEASON_EXP", "season_exp"),
];

const HEADLINE_COLUMNS: &[(&str, &str)] = &[
    ("TimeFrame", "time_frame"),
    ("PTS", "pts"),
    ("REB", "reb"),
    ("AST", "ast"),
    ("PIE", "pie"),
];

/// Reads the profile from the stats API's `commonplayerinfo` endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiSource;

impl ProfileSource for ApiSource {
    fn name(&self) -> &'static str {
        "api"
    }

    fn load_profile<'a>(&'a self, client: &'a CsClient) -> SourceFuture<'a, PlayerProfile> {
        Box::pin(load_from_player_info_api(client))
    }
}

pub(crate) async fn load_from_player_info_api(
    client: &CsClient,
) -> Result<PlayerProfile, CsError> {
    let mut url = client.base_stats().join("commonplayerinfo")?;
    url.query_pairs_mut()
        .append_pair("LeagueID", "00")
        .append_pair("PlayerID", &client.player_id().to_string());

    let body = net::fetch_text(client, url, "commonplayerinfo", "json").await?;
    let env = StatsEnvelope::parse(&body)?;
    profile_from_envelope(&env)
}

pub(crate) fn profile_from_envelope(env: &StatsEnvelope) -> Result<PlayerProfile, CsError> {
    let set = env.partition(INFO_SET)?;
    let projection = Projection::new(set, INFO_COLUMNS)?;
    let row = projection.row(set.first_row()?)?;

    let or_unknown = |v: Option<String>| v.unwrap_or_else(|| UNKNOWN.to_string());

    let name = match (row.string("first_name")?, row.string("last_name")?) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(one), None) | (None, Some(one)) => one,
        (None, None) => UNKNOWN.to_string(),
    };

    let team = match (row.string("team_city")?, row.string("team_name")?) {
        (Some(city), Some(name)) => format!("{city} {name}"),
        (_, Some(name)) => name,
        (Some(_), None) | (None, None) => UNKNOWN.to_string(),
    };

    let height = row.string("height")?;
    let weight = row.string("weight")?;
    let height_metric = height.as_deref().and_then(feet_inches_to_cm);
    let weight_metric = weight.as_deref().and_then(pounds_to_kg);

    let birthdate = row
        .string("birthdate")?
        .map(|b| b.split('T').next().unwrap_or_default().to_string());
    let age = birthdate
        .as_deref()
        .and_then(|b| age_on(b, Utc::now().date_naive()));

    let draft = format_draft(
        row.string("draft_year")?.as_deref(),
        row.string("draft_round")?.as_deref(),
        row.string("draft_number")?.as_deref(),
    );

    let experience = row
        .string("season_exp")?
        .map_or_else(|| UNKNOWN.to_string(), |n| format!("{n} Years"));

    Ok(PlayerProfile {
        name,
        team,
        position: or_unknown(row.string("position")?),
        height: or_unknown(height),
        weight: or_unknown(weight.map(|w| format!("{w}lb"))),
        height_metric: or_unknown(height_metric),
        weight_metric: or_unknown(weight_metric),
        country: or_unknown(row.string("country")?),
        birthdate: or_unknown(birthdate),
        age,
        draft,
        experience,
        jersey: row.string("jersey")?,
        last_attended: row.string("last_affiliation")?,
        headline: headline_from_envelope(env),
    })
}

/// The headline partition is optional; anything wrong with it drops the headline only.
fn headline_from_envelope(env: &StatsEnvelope) -> Option<HeadlineStats> {
    let set = env.find(HEADLINE_SET)?;
    let parse = || -> Result<HeadlineStats, CsError> {
        let projection = Projection::new(set, HEADLINE_COLUMNS)?;
        let row = projection.row(set.first_row()?)?;
        Ok(HeadlineStats {
            time_frame: row.string("time_frame")?.unwrap_or_default(),
            ppg: row.f64("pts")?,
            rpg: row.f64("reb")?,
            apg: row.f64("ast")?,
            pie: row.opt_f64("pie")?,
        })
    };
    match parse() {
        Ok(h) => Some(h),
        Err(e) => {
            tracing::debug!(error = %e, "headline stats unavailable");
            None
        }
    }
}

/// `"{year} R{round} Pick {number}"`, or `"Undrafted"` when no draft year is recorded.
pub fn format_draft(year: Option<&str>, round: Option<&str>, number: Option<&str>) -> String {
    match year.map(str::trim) {
        Some(y) if !y.is_empty() && !y.eq_ignore_ascii_case(UNDRAFTED) => format!(
            "{y} R{} Pick {}",
            round.unwrap_or(UNKNOWN),
            number.unwrap_or(UNKNOWN)
        ),
        _ => UNDRAFTED.to_string(),
    }
}

/// `6-9` → `206cm`.
pub(crate) fn feet_inches_to_cm(height: &str) -> Option<String> {
    let (feet, inches) = height.trim().split_once('-')?;
    let feet: u32 = feet.trim().parse().ok()?;
    let inches: u32 = inches.trim().parse().ok()?;
    let total = feet.checked_mul(12)?.checked_add(inches)?;
    let cm = f64::from(total) * 2.54;
    Some(format!("{}cm", cm.round()))
}

/// `250` → `113kg`.
pub(crate) fn pounds_to_kg(weight: &str) -> Option<String> {
    let lb: f64 = weight.trim().trim_end_matches("lb").parse().ok()?;
    if !lb.is_finite() || lb < 0.0 {
        return None;
    }
    Some(format!("{}kg", (lb * 0.453_592_37).round()))
}
