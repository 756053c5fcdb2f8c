//! HTTP plumbing for catalog requests.
//!
//! Provides a configured [`reqwest::Client`] and a GET-then-decode helper that
//! keeps transport failures ([`SearchError::Http`] / [`SearchError::Timeout`])
//! apart from shape failures ([`SearchError::Parse`]).

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("spotify-scope/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for one search invocation.
///
/// The client has:
/// - Timeout from config, so a stalled call cannot block forever
/// - Custom or default User-Agent
/// - gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Issue a GET to `url` and decode the JSON body into `T`.
///
/// `label` names the endpoint in error messages.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: url::Url,
    label: &str,
) -> Result<T, SearchError> {
    tracing::trace!(%url, "{label} request");

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| SearchError::from_transport(&format!("{label} request failed"), e))?
        .error_for_status()
        .map_err(|e| SearchError::Http(format!("{label} HTTP error: {e}")))?;

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::from_transport(&format!("{label} response read failed"), e))?;

    tracing::trace!(bytes = body.len(), "{label} response received");

    decode_json(&body, label)
}

/// Decode a JSON body, mapping any shape mismatch to [`SearchError::Parse`].
pub fn decode_json<T: DeserializeOwned>(body: &str, label: &str) -> Result<T, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Parse(format!("{label}: {e}")))
}
