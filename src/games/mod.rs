//! Recent games: box scores from the game-log table or the stats API.

mod api;
mod model;
mod scrape;

pub use api::ApiGameLog;
pub use model::{GameLogEntry, Rebounds, ShootingSplit};
pub use scrape::{DATA_ROW_CELLS, MarkupGameLog, parse_game_log_html};

use crate::core::{CsClient, CsError, GameLogSource, SourcePreference};

/// Number of games returned unless the builder says otherwise.
pub const DEFAULT_GAME_LIMIT: usize = 5;

/// A builder for fetching the most recent games of the subject.
pub struct GameLogBuilder {
    client: CsClient,
    limit: usize,
}

impl GameLogBuilder {
    /// Creates a new `GameLogBuilder` returning [`DEFAULT_GAME_LIMIT`] games.
    pub fn new(client: &CsClient) -> Self {
        Self {
            client: client.clone(),
            limit: DEFAULT_GAME_LIMIT,
        }
    }

    /// Sets the maximum number of games to return.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the request. Games keep source order (most recent first) and
    /// are never re-sorted.
    ///
    /// # Errors
    ///
    /// Returns `CsError` if the request fails, the status is not 2xx, or any
    /// data row cannot be parsed. No partial list is returned.
    pub async fn fetch(self) -> Result<Vec<GameLogEntry>, CsError> {
        let client = &self.client;
        match client.source_preference() {
            SourcePreference::MarkupOnly => MarkupGameLog.load_games(client, self.limit).await,
            SourcePreference::ApiOnly => ApiGameLog.load_games(client, self.limit).await,
            SourcePreference::ApiThenMarkup => {
                match ApiGameLog.load_games(client, self.limit).await {
                    Ok(games) => Ok(games),
                    Err(e) => {
                        tracing::warn!(
                            error = %e,
                            "api game log failed, falling back to markup"
                        );
                        MarkupGameLog.load_games(client, self.limit).await
                    }
                }
            }
        }
    }
}
