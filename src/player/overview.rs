use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::career::CareerTotals;
use crate::games::GameLogEntry;
use crate::profile::{PlayerProfile, UNKNOWN};
use crate::schedule::ScheduledGame;

use super::Player;

/// All sections of a player page. Each is `None` when its source failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub career: Option<CareerTotals>,
    pub profile: Option<PlayerProfile>,
    pub recent_games: Option<Vec<GameLogEntry>>,
    pub upcoming_games: Option<Vec<ScheduledGame>>,
}

/// Career, profile and games run concurrently; the schedule waits for the
/// profile because it needs the team name.
#[tracing::instrument(skip_all, fields(player_id = player.client.player_id()))]
pub(super) async fn fetch_overview(player: &Player, now: DateTime<Utc>) -> Overview {
    let (career, profile, recent_games) = futures::join!(
        player.career_totals(),
        player.profile(),
        player.recent_games(),
    );

    // An unknown team falls through to the client's default team.
    let team = profile
        .as_ref()
        .map(|p| p.team.as_str())
        .filter(|t| *t != UNKNOWN)
        .unwrap_or("");
    let upcoming_games = player.upcoming_games_at(team, now).await;

    Overview {
        career,
        profile,
        recent_games,
        upcoming_games,
    }
}
