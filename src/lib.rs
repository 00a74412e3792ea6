//! courtside-rs: data layer for a player fan page.
//!
//! Four independent fetch-and-normalize units feed the page:
//! - [`career`]: career totals from the stats API.
//! - [`profile`]: biographical/roster profile from the stats API or the HTML profile page.
//! - [`games`]: the most recent box scores from the game-log table or the stats API.
//! - [`schedule`]: a team's next games from the league schedule feed.
//!
//! [`Player`] wraps them for a rendering layer: each operation returns `Option`,
//! and a failed fetch is logged and becomes `None`.

pub mod career;
pub mod core;
pub mod games;
pub mod player;
pub mod profile;
pub mod schedule;

pub use career::{CareerTotals, SeasonAggregate, SeasonLine};
pub use crate::core::{CsClient, CsClientBuilder, CsError, SourcePreference};
pub use games::{GameLogBuilder, GameLogEntry, Rebounds, ShootingSplit};
pub use player::{Overview, Player};
pub use profile::{HeadlineStats, PlayerProfile};
pub use schedule::{ScheduleBuilder, ScheduledGame, TeamInfo};
