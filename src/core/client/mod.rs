//! Public client surface + builder.
//! Defaults (UA, endpoints, subject) live in `constants`.

mod constants;

use crate::core::CsError;
use chrono_tz::Tz;
use constants::{
    DEFAULT_BASE_STATS, DEFAULT_GAMELOG_PAGE, DEFAULT_PLAYER_ID, DEFAULT_PROFILE_PAGE,
    DEFAULT_REFERER, DEFAULT_SCHEDULE_URL, DEFAULT_SEASON, DEFAULT_TEAM, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Chooses which data source backs the profile and game-log lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourcePreference {
    /// Try the stats API first, then fall back to parsing the HTML page if it fails.
    #[default]
    ApiThenMarkup,
    /// Use only the stats API.
    ApiOnly,
    /// Use only the HTML page.
    MarkupOnly,
}

#[derive(Debug, Clone)]
pub struct CsClient {
    http: Client,
    referer: String,
    base_stats: Url,
    profile_page: Url,
    gamelog_page: Url,
    schedule_url: Url,

    player_id: u32,
    season: String,
    default_team: String,
    timezone: Tz,
    source_preference: SourcePreference,
}

impl Default for CsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl CsClient {
    /// Create a new builder.
    pub fn builder() -> CsClientBuilder {
        CsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn referer(&self) -> &str {
        &self.referer
    }
    pub(crate) fn base_stats(&self) -> &Url {
        &self.base_stats
    }
    pub(crate) fn profile_page(&self) -> &Url {
        &self.profile_page
    }
    pub(crate) fn gamelog_page(&self) -> &Url {
        &self.gamelog_page
    }
    pub(crate) fn schedule_url(&self) -> &Url {
        &self.schedule_url
    }

    /// Stats API person id of the subject.
    pub fn player_id(&self) -> u32 {
        self.player_id
    }

    /// Season key (e.g. `2024-25`) used by the game-log API strategy.
    pub fn season(&self) -> &str {
        &self.season
    }

    /// Team used by schedule lookups when the caller passes an empty name.
    pub fn default_team(&self) -> &str {
        &self.default_team
    }

    /// Time zone that schedule dates and times are rendered in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn source_preference(&self) -> SourcePreference {
        self.source_preference
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct CsClientBuilder {
    user_agent: Option<String>,
    referer: Option<String>,
    base_stats: Option<Url>,
    profile_page: Option<Url>,
    gamelog_page: Option<Url>,
    schedule_url: Option<Url>,

    player_id: Option<u32>,
    season: Option<String>,
    default_team: Option<String>,
    timezone: Option<Tz>,
    source_preference: Option<SourcePreference>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl CsClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Referer sent to the stats API.
    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Override the stats API base (e.g., `https://stats.nba.com/stats/`).
    pub fn base_stats(mut self, url: Url) -> Self {
        self.base_stats = Some(url);
        self
    }

    /// Override the HTML profile page URL.
    pub fn profile_page(mut self, url: Url) -> Self {
        self.profile_page = Some(url);
        self
    }

    /// Override the HTML game-log page URL.
    pub fn gamelog_page(mut self, url: Url) -> Self {
        self.gamelog_page = Some(url);
        self
    }

    /// Override the league schedule feed URL.
    pub fn schedule_url(mut self, url: Url) -> Self {
        self.schedule_url = Some(url);
        self
    }

    /// Stats API person id of the subject. Default: 2544.
    pub fn player_id(mut self, id: u32) -> Self {
        self.player_id = Some(id);
        self
    }

    /// Season key for the game-log API strategy. Default: `2024-25`.
    pub fn season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Team used when a schedule lookup receives an empty name. Default: `Lakers`.
    pub fn default_team(mut self, team: impl Into<String>) -> Self {
        self.default_team = Some(team.into());
        self
    }

    /// Time zone for rendered schedule dates/times. Default: `America/New_York`.
    pub fn timezone(mut self, tz: Tz) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Choose which data source backs profile and game-log lookups.
    pub fn source_preference(mut self, pref: SourcePreference) -> Self {
        self.source_preference = Some(pref);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<CsClient, CsError> {
        let base_stats = match self.base_stats {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_STATS)?,
        };
        let profile_page = match self.profile_page {
            Some(u) => u,
            None => Url::parse(DEFAULT_PROFILE_PAGE)?,
        };
        let gamelog_page = match self.gamelog_page {
            Some(u) => u,
            None => Url::parse(DEFAULT_GAMELOG_PAGE)?,
        };
        let schedule_url = match self.schedule_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_SCHEDULE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(CsClient {
            http,
            referer: self.referer.unwrap_or_else(|| DEFAULT_REFERER.to_string()),
            base_stats,
            profile_page,
            gamelog_page,
            schedule_url,
            player_id: self.player_id.unwrap_or(DEFAULT_PLAYER_ID),
            season: self.season.unwrap_or_else(|| DEFAULT_SEASON.to_string()),
            default_team: self
                .default_team
                .unwrap_or_else(|| DEFAULT_TEAM.to_string()),
            timezone: self.timezone.unwrap_or(chrono_tz::America::New_York),
            source_preference: self.source_preference.unwrap_or_default(),
        })
    }
}
