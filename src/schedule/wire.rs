use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ScheduleEnvelope {
    #[serde(rename = "leagueSchedule")]
    pub(crate) league_schedule: Option<LeagueSchedule>,
}

#[derive(Deserialize)]
pub(crate) struct LeagueSchedule {
    #[serde(rename = "gameDates")]
    pub(crate) game_dates: Option<Vec<GameDate>>,
}

#[derive(Deserialize)]
pub(crate) struct GameDate {
    #[serde(default)]
    pub(crate) games: Vec<WireGame>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireGame {
    pub(crate) game_id: Option<String>,
    /// Kickoff instant, RFC 3339. Unparseable values never count as upcoming.
    #[serde(rename = "gameDateTimeUTC")]
    pub(crate) game_date_time_utc: Option<String>,
    pub(crate) arena_name: Option<String>,
    pub(crate) arena_city: Option<String>,
    pub(crate) home_team: Option<WireTeam>,
    pub(crate) away_team: Option<WireTeam>,
    pub(crate) broadcasters: Option<WireBroadcasters>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireTeam {
    pub(crate) team_name: Option<String>,
    pub(crate) team_city: Option<String>,
    pub(crate) team_tricode: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireBroadcasters {
    #[serde(default)]
    pub(crate) national_broadcasters: Vec<WireBroadcaster>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireBroadcaster {
    pub(crate) broadcaster_display: Option<String>,
}
