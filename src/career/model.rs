use serde::Serialize;

/// Cumulative totals for one competition phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAggregate {
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub games_played: u32,
    pub field_goal_percentage: f64,
    pub three_point_percentage: f64,
    pub free_throw_percentage: f64,
    pub minutes: f64,
}

/// Career totals split by competition phase. Both halves are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerTotals {
    pub regular_season: SeasonAggregate,
    pub post_season: SeasonAggregate,
}

impl CareerTotals {
    /// Regular-season plus postseason points.
    pub fn combined_points(&self) -> u64 {
        u64::from(self.regular_season.points) + u64::from(self.post_season.points)
    }
}

/// One regular-season row of the season-by-season totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLine {
    /// Season key, e.g. `2003-04`.
    pub season_id: String,
    /// `TOT` for a season split across teams.
    pub team_abbreviation: String,
    pub player_age: Option<f64>,
    pub games_played: u32,
    pub minutes: f64,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
}
