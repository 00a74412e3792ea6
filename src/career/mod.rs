//! Career totals from the stats API.

mod api;
mod model;

pub use model::{CareerTotals, SeasonAggregate, SeasonLine};

use crate::core::{CsClient, CsError};

/// Loads the subject's career regular-season and postseason totals.
///
/// # Errors
///
/// Returns `CsError` if the request fails, the status is not 2xx, or either
/// career partition (or one of its mapped columns) is missing. No partial
/// record is ever returned.
pub async fn load_career_totals(client: &CsClient) -> Result<CareerTotals, CsError> {
    api::fetch_career_totals(client).await
}

/// Loads the season-by-season regular-season totals.
///
/// # Errors
///
/// Same conditions as [`load_career_totals`], for the `SeasonTotalsRegularSeason` partition.
pub async fn load_season_totals(client: &CsClient) -> Result<Vec<SeasonLine>, CsError> {
    api::fetch_season_totals(client).await
}

/// Sum of points across season lines.
///
/// A season played for several teams carries one row per team plus a `TOT`
/// row; only the `TOT` row is counted for such seasons.
pub fn season_points_total(seasons: &[SeasonLine]) -> u64 {
    let split_seasons: Vec<&str> = seasons
        .iter()
        .filter(|s| s.team_abbreviation == "TOT")
        .map(|s| s.season_id.as_str())
        .collect();

    seasons
        .iter()
        .filter(|s| {
            s.team_abbreviation == "TOT" || !split_seasons.contains(&s.season_id.as_str())
        })
        .map(|s| u64::from(s.points))
        .sum()
}
