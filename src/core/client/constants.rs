//! Centralized constants for default endpoints, headers and subject.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// The stats API rejects requests without an nba.com referer.
pub(crate) const DEFAULT_REFERER: &str = "https://www.nba.com/";

/// Stats API base (endpoint name is appended).
pub(crate) const DEFAULT_BASE_STATS: &str = "https://stats.nba.com/stats/";

/// Public HTML profile page of the subject.
pub(crate) const DEFAULT_PROFILE_PAGE: &str =
    "https://www.basketball-reference.com/players/j/jamesle01.html";

/// Public HTML game-log page of the subject for the current season.
pub(crate) const DEFAULT_GAMELOG_PAGE: &str =
    "https://www.basketball-reference.com/players/j/jamesle01/gamelog/2025";

/// Full-league schedule feed.
pub(crate) const DEFAULT_SCHEDULE_URL: &str =
    "https://cdn.nba.com/static/json/staticData/scheduleLeagueV2.json";

/// Stats API person id of the subject.
pub(crate) const DEFAULT_PLAYER_ID: u32 = 2544;

/// Season key used by the game-log API strategy.
pub(crate) const DEFAULT_SEASON: &str = "2024-25";

/// Team used for schedule lookups when the caller passes an empty name.
pub(crate) const DEFAULT_TEAM: &str = "Lakers";
