use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA, REFERER};
use url::Url;

use crate::core::{CsClient, CsError};

/// Saves live bodies as `{endpoint}_{subject}.{ext}` so offline tests can replay them.
/// Active under the `test-mode` feature when `CS_RECORD=1`; `CS_FIXDIR`
/// overrides the default `tests/fixtures` directory.
#[cfg(feature = "test-mode")]
fn record_fixture(endpoint: &str, subject: &str, ext: &str, body: &str) {
    use std::path::PathBuf;

    if std::env::var("CS_RECORD").ok().as_deref() != Some("1") {
        return;
    }
    let dir = std::env::var_os("CS_FIXDIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        PathBuf::from,
    );
    let path = dir.join(format!("{endpoint}_{subject}.{ext}"));
    match std::fs::create_dir_all(&dir).and_then(|()| std::fs::write(&path, body)) {
        Ok(()) => tracing::debug!(path = %path.display(), "recorded fixture"),
        Err(e) => tracing::warn!(error = %e, path = %path.display(), "fixture not recorded"),
    }
}

/// Issue one uncached GET and return the body of a 2xx response.
///
/// Every call goes to the network: the request asks intermediaries not to serve
/// a stored copy, and nothing is kept on our side.
pub(crate) async fn fetch_text(
    client: &CsClient,
    url: Url,
    endpoint: &str,
    ext: &str,
) -> Result<String, CsError> {
    let accept = if ext == "json" {
        "application/json, text/plain, */*"
    } else {
        "text/html,application/xhtml+xml,*/*;q=0.8"
    };

    tracing::debug!(%url, endpoint, "GET");
    let resp = client
        .http()
        .get(url.clone())
        .header(ACCEPT, accept)
        .header(REFERER, client.referer())
        .header(CACHE_CONTROL, "no-cache, no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(CsError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    #[cfg(feature = "test-mode")]
    record_fixture(endpoint, &client.player_id().to_string(), ext, &body);
    tracing::debug!(endpoint, bytes = body.len(), "response received");
    Ok(body)
}
