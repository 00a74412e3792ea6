//! Upcoming games for one team from the league schedule feed.

mod api;
mod model;
mod wire;

pub use model::{ScheduledGame, TeamInfo};

use chrono::{DateTime, Utc};

use crate::core::{CsClient, CsError};

/// Broadcaster list entry used when the feed names no national broadcaster.
pub const NO_BROADCASTER_INFO: &str = "No broadcaster info available";

/// Number of games returned unless the builder says otherwise.
pub const DEFAULT_SCHEDULE_LIMIT: usize = 5;

/// Normalize a free-text team name to the match key: trimmed, defaulted to
/// `default_team` when empty, last word, lower-cased.
///
/// `"Los Angeles Lakers"` and `"lakers"` both yield `"lakers"`.
pub fn match_key(team: &str, default_team: &str) -> String {
    api::last_word_key(team)
        .or_else(|| api::last_word_key(default_team))
        .unwrap_or_default()
}

/// A builder for fetching one team's next games.
pub struct ScheduleBuilder {
    client: CsClient,
    team: String,
    limit: usize,
    now: Option<DateTime<Utc>>,
}

impl ScheduleBuilder {
    /// Creates a new `ScheduleBuilder` for a team name such as `"Los Angeles Lakers"`.
    pub fn new(client: &CsClient, team: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            team: team.into(),
            limit: DEFAULT_SCHEDULE_LIMIT,
            now: None,
        }
    }

    /// Sets the maximum number of games to return.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the reference instant; only games strictly after it are returned.
    /// Defaults to the current time when `fetch` runs.
    #[must_use]
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `CsError` if the request fails, the status is not 2xx, or the
    /// feed has no `leagueSchedule.gameDates`.
    pub async fn fetch(self) -> Result<Vec<ScheduledGame>, CsError> {
        let key = match_key(&self.team, self.client.default_team());
        let now = self.now.unwrap_or_else(Utc::now);
        api::fetch_upcoming(&self.client, &key, now, self.limit).await
    }
}
