mod overview;

pub use overview::Overview;

use chrono::{DateTime, Utc};

use crate::career::{self, CareerTotals, SeasonLine};
use crate::core::{CsClient, CsError};
use crate::games::{GameLogBuilder, GameLogEntry};
use crate::profile::{self, PlayerProfile};
use crate::schedule::{ScheduleBuilder, ScheduledGame};

/// The rendering layer's entry point for the subject configured on the client.
///
/// Every operation is a fresh round trip. Failures never cross this boundary:
/// they are logged at `warn` and surface as `None`, which a page renders as
/// its "no data" state.
///
/// # Example
///
/// ```no_run
/// # use courtside_rs::{CsClient, Player};
/// # #[tokio::main]
/// # async fn main() {
/// let client = CsClient::default();
/// let player = Player::new(&client);
///
/// match player.career_totals().await {
///     Some(totals) => println!("career points: {}", totals.combined_points()),
///     None => println!("N/A"),
/// }
/// # }
/// ```
pub struct Player {
    client: CsClient,
}

/// Turn a failed fetch into the absent-value marker.
fn absent_on_error<T>(what: &str, result: Result<T, CsError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(error = %e, "{what} unavailable");
            None
        }
    }
}

impl Player {
    pub fn new(client: &CsClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Career regular-season and postseason totals.
    #[tracing::instrument(skip_all, fields(player_id = self.client.player_id()))]
    pub async fn career_totals(&self) -> Option<CareerTotals> {
        absent_on_error(
            "career totals",
            career::load_career_totals(&self.client).await,
        )
    }

    /// Season-by-season regular-season totals.
    #[tracing::instrument(skip_all, fields(player_id = self.client.player_id()))]
    pub async fn season_totals(&self) -> Option<Vec<SeasonLine>> {
        absent_on_error(
            "season totals",
            career::load_season_totals(&self.client).await,
        )
    }

    /// Biographical/roster profile.
    #[tracing::instrument(skip_all, fields(player_id = self.client.player_id()))]
    pub async fn profile(&self) -> Option<PlayerProfile> {
        absent_on_error("profile", profile::load_profile(&self.client).await)
    }

    /// The five most recent games, most recent first.
    #[tracing::instrument(skip_all, fields(player_id = self.client.player_id()))]
    pub async fn recent_games(&self) -> Option<Vec<GameLogEntry>> {
        absent_on_error(
            "recent games",
            GameLogBuilder::new(&self.client).fetch().await,
        )
    }

    /// The next five games of `team` (free text; empty means the client's default team).
    pub async fn upcoming_games(&self, team: &str) -> Option<Vec<ScheduledGame>> {
        self.upcoming_games_at(team, Utc::now()).await
    }

    /// Like [`upcoming_games`](Self::upcoming_games), relative to `now`.
    #[tracing::instrument(skip(self))]
    pub async fn upcoming_games_at(
        &self,
        team: &str,
        now: DateTime<Utc>,
    ) -> Option<Vec<ScheduledGame>> {
        absent_on_error(
            "upcoming games",
            ScheduleBuilder::new(&self.client, team)
                .now(now)
                .fetch()
                .await,
        )
    }

    /// Everything a player page shows, see [`Overview`].
    pub async fn overview(&self) -> Overview {
        self.overview_at(Utc::now()).await
    }

    /// Like [`overview`](Self::overview), with schedule filtering relative to `now`.
    pub async fn overview_at(&self, now: DateTime<Utc>) -> Overview {
        overview::fetch_overview(self, now).await
    }
}
