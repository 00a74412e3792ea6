//! Public profile types + loading strategy (API first, then markup).
//!
//! Internals are split into:
//! - `api`:    stats API `commonplayerinfo` path
//! - `scrape`: HTML profile page + text-pattern extraction path

mod api;
mod model;
mod scrape;

pub use api::{ApiSource, format_draft};
pub use model::{HeadlineStats, PlayerProfile};
pub use scrape::extract::{Measurements, parse_measurements};
pub use scrape::{MarkupSource, parse_profile_html};

use chrono::NaiveDate;

use crate::core::{CsClient, CsError, ProfileSource, SourcePreference};

/// Placeholder for a value the stats API did not supply.
pub const UNKNOWN: &str = "N/A";
/// Draft text for players without a recorded draft year.
pub const UNDRAFTED: &str = "Undrafted";

/// Whole years between an ISO `YYYY-MM-DD` birthdate and `today`.
///
/// `None` when the text is not an ISO date or lies after `today`.
pub fn age_on(birthdate: &str, today: NaiveDate) -> Option<u32> {
    let born = NaiveDate::parse_from_str(birthdate.trim(), "%Y-%m-%d").ok()?;
    today.years_since(born)
}

/// Helper to contain the API->markup fallback logic.
async fn load_with_fallback(
    client: &CsClient,
    primary: &dyn ProfileSource,
    fallback: &dyn ProfileSource,
) -> Result<PlayerProfile, CsError> {
    match primary.load_profile(client).await {
        Ok(p) => Ok(p),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "{} profile source failed, falling back to {}",
                primary.name(),
                fallback.name()
            );
            fallback.load_profile(client).await
        }
    }
}

/// Loads the subject's profile from the source(s) the client's
/// [`SourcePreference`] selects.
///
/// # Errors
///
/// Returns `CsError` if the request fails, the status is not 2xx, or (API
/// path) the `CommonPlayerInfo` partition is missing. Under
/// `ApiThenMarkup`, the markup error is returned when both fail.
pub async fn load_profile(client: &CsClient) -> Result<PlayerProfile, CsError> {
    match client.source_preference() {
        SourcePreference::ApiThenMarkup => {
            load_with_fallback(client, &ApiSource, &MarkupSource).await
        }
        SourcePreference::ApiOnly => ApiSource.load_profile(client).await,
        SourcePreference::MarkupOnly => MarkupSource.load_profile(client).await,
    }
}
