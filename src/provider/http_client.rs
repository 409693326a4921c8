//! Shared HTTP client construction policy for works providers.
//!
//! Centralizes networking defaults so provider clients stay consistent on
//! timeout, user-agent, and compression.

use std::time::Duration;

use reqwest::Client;

use super::ProviderError;

/// Connection establishment timeout.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Full request timeout. Works pages are small JSON documents; anything
/// slower than this indicates a stuck upstream, not a large payload.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Builds the shared provider user-agent string.
#[must_use]
pub fn provider_user_agent() -> String {
    format!(
        "citetrack/{} (research metrics; +https://github.com/citetrack/citetrack)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Builds a provider HTTP client using shared project policy.
///
/// # Errors
///
/// Returns [`ProviderError::ClientBuild`] when client construction fails.
pub fn build_provider_http_client() -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(provider_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| ProviderError::ClientBuild {
            reason: error.to_string(),
        })
}
