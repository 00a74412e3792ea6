use serde::Serialize;

/// Per-game headline numbers the stats API publishes next to the profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineStats {
    /// Window the averages cover, e.g. `2024-25`.
    pub time_frame: String,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    /// Player impact estimate.
    pub pie: Option<f64>,
}

/// Normalized biographical/roster record.
///
/// Fields are best-effort: the API path fills gaps with [`UNKNOWN`](super::UNKNOWN),
/// the markup path leaves unmatched patterns as `""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub name: String,
    pub team: String,
    pub position: String,
    /// Feet-inches, e.g. `6-9`.
    pub height: String,
    /// Pounds, e.g. `250lb`.
    pub weight: String,
    pub height_metric: String,
    pub weight_metric: String,
    pub country: String,
    pub birthdate: String,
    /// Whole years since `birthdate`, when that is an ISO date.
    pub age: Option<u32>,
    pub draft: String,
    pub experience: String,
    pub jersey: Option<String>,
    pub last_attended: Option<String>,
    pub headline: Option<HeadlineStats>,
}
