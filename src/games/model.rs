use serde::Serialize;

/// Made/attempted pair plus the published percentage (absent with zero attempts).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootingSplit {
    pub made: u32,
    pub attempted: u32,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rebounds {
    pub offensive: u32,
    pub defensive: u32,
    pub total: u32,
}

/// One game of box-score data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogEntry {
    pub date: String,
    /// Opponent abbreviation, e.g. `BOS`.
    pub opponent: String,
    /// `false` for road games.
    pub home: bool,
    /// Outcome with score, e.g. `W (+12)` or `W`.
    pub result: String,
    /// `MM:SS` or whole minutes, as published.
    pub minutes_played: String,
    pub field_goals: ShootingSplit,
    pub three_pointers: ShootingSplit,
    pub free_throws: ShootingSplit,
    pub rebounds: Rebounds,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
    pub points: u32,
    pub game_score: f64,
    pub plus_minus: Option<i32>,
}

impl GameLogEntry {
    /// Hollinger game score from the box-score counts.
    pub fn compute_game_score(&self) -> f64 {
        let fg = &self.field_goals;
        let ft = &self.free_throws;
        let raw = f64::from(self.points) + 0.4 * f64::from(fg.made)
            - 0.7 * f64::from(fg.attempted)
            - 0.4 * (f64::from(ft.attempted) - f64::from(ft.made))
            + 0.7 * f64::from(self.rebounds.offensive)
            + 0.3 * f64::from(self.rebounds.defensive)
            + f64::from(self.steals)
            + 0.7 * f64::from(self.assists)
            + 0.7 * f64::from(self.blocks)
            - 0.4 * f64::from(self.fouls)
            - f64::from(self.turnovers);
        (raw * 10.0).round() / 10.0
    }
}
