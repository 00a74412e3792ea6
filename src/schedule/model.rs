use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub name: String,
    pub city: String,
    pub tricode: String,
}

/// One upcoming game, rendered in the client's time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledGame {
    pub game_id: String,
    /// en-US short date, e.g. `10/22/2024`.
    pub date: String,
    /// 12-hour clock, e.g. `07:30 PM`.
    pub time: String,
    pub home_team: TeamInfo,
    pub away_team: TeamInfo,
    pub arena: String,
    pub arena_city: String,
    /// National broadcasters in feed order, or the single "no info" sentinel.
    pub broadcasters: Vec<String>,
    /// `"{date} {time}"`.
    pub local_time: String,
    pub starts_at: DateTime<Utc>,
}
