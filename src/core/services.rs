use std::future::Future;
use std::pin::Pin;

use crate::core::{CsClient, CsError};
use crate::games::GameLogEntry;
use crate::profile::PlayerProfile;

/// Boxed future returned by the source traits.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, CsError>> + Send + 'a>>;

/// A place a [`PlayerProfile`] can be read from.
///
/// Implemented by [`crate::profile::ApiSource`] (stats API) and
/// [`crate::profile::MarkupSource`] (HTML profile page). The client's
/// [`SourcePreference`](crate::core::client::SourcePreference) picks which one
/// runs.
pub trait ProfileSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch and normalize the subject's profile.
    fn load_profile<'a>(&'a self, client: &'a CsClient) -> SourceFuture<'a, PlayerProfile>;
}

/// A place the recent game log can be read from.
pub trait GameLogSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch up to `limit` games, most recent first.
    fn load_games<'a>(
        &'a self,
        client: &'a CsClient,
        limit: usize,
    ) -> SourceFuture<'a, Vec<GameLogEntry>>;
}
