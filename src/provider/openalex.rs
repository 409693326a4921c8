//! OpenAlex works provider - fetches a researcher's publication list.
//!
//! The [`OpenAlexProvider`] pages through the works endpoint with cursor
//! pagination, selecting only the fields the history engine needs. All
//! requests carry a `mailto` parameter for polite-pool access and are paced
//! through the shared [`RateLimiter`](super::RateLimiter).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client::build_provider_http_client;
use super::{ProviderError, RateLimiter, Work, WorksProvider};

/// Default OpenAlex API base URL.
const DEFAULT_BASE_URL: &str = "https://api.openalex.org";

/// Works returned per page (the endpoint maximum).
const PER_PAGE: u32 = 200;

/// Safety cap on works fetched per author. Prolific authors beyond this are
/// truncated rather than paged indefinitely.
const MAX_WORKS: usize = 2000;

/// Fields requested per work; everything else is dead weight on the wire.
const WORK_FIELDS: &str = "id,publication_year,cited_by_count";

// ==================== OpenAlex API Response Types ====================

/// One page of the works listing.
#[derive(Debug, Deserialize)]
struct WorksPage {
    #[serde(default)]
    results: Vec<Work>,
    #[serde(default)]
    meta: PageMeta,
}

/// Pagination metadata from a works page.
#[derive(Debug, Default, Deserialize)]
struct PageMeta {
    next_cursor: Option<String>,
}

// ==================== OpenAlexProvider ====================

/// Fetches researcher works from the OpenAlex REST API.
///
/// # Polite Pool
///
/// All requests include a `mailto` query parameter, which routes them to the
/// polite pool with its higher, more predictable rate limits.
pub struct OpenAlexProvider {
    client: Client,
    base_url: String,
    mailto: String,
    rate_limiter: Arc<RateLimiter>,
}

impl OpenAlexProvider {
    /// Creates a provider for the production OpenAlex endpoint.
    ///
    /// # Arguments
    ///
    /// * `mailto` - Contact email for polite pool access
    /// * `rate_limiter` - Shared pacer for outbound requests
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ClientBuild`] if HTTP client construction
    /// fails or the mailto contains control characters.
    #[tracing::instrument(skip_all, fields(mailto))]
    pub fn new(
        mailto: impl Into<String>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Result<Self, ProviderError> {
        Self::build(mailto.into(), DEFAULT_BASE_URL.to_string(), rate_limiter)
    }

    /// Creates a provider with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ClientBuild`] if HTTP client construction
    /// fails or the mailto contains control characters.
    #[tracing::instrument(skip_all, fields(mailto, base_url))]
    pub fn with_base_url(
        mailto: impl Into<String>,
        base_url: impl Into<String>,
        rate_limiter: Arc<RateLimiter>,
    ) -> Result<Self, ProviderError> {
        Self::build(mailto.into(), base_url.into(), rate_limiter)
    }

    fn build(
        mailto: String,
        base_url: String,
        rate_limiter: Arc<RateLimiter>,
    ) -> Result<Self, ProviderError> {
        if mailto.chars().any(|c| c == '\n' || c == '\r' || c == '\0') {
            return Err(ProviderError::ClientBuild {
                reason: "mailto contains invalid control characters".to_string(),
            });
        }

        let client = build_provider_http_client()?;

        Ok(Self {
            client,
            base_url,
            mailto,
            rate_limiter,
        })
    }

    /// Fetches one page of works for an author.
    async fn fetch_page(&self, author_id: &str, cursor: &str) -> Result<WorksPage, ProviderError> {
        let url = format!(
            "{}/works?filter=author.id:{}&per-page={}&cursor={}&select={}&mailto={}",
            self.base_url,
            urlencoding::encode(author_id),
            PER_PAGE,
            urlencoding::encode(cursor),
            WORK_FIELDS,
            urlencoding::encode(&self.mailto)
        );

        self.rate_limiter.acquire(&url).await;

        debug!(api_url = %url, "requesting works page");

        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(error) if error.is_timeout() => {
                return Err(ProviderError::timeout(author_id));
            }
            Err(error) => {
                return Err(ProviderError::network(author_id, error));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                404 => ProviderError::not_found(author_id),
                429 => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    ProviderError::rate_limited(author_id, retry_after)
                }
                code => ProviderError::http_status(author_id, code),
            });
        }

        response
            .json::<WorksPage>()
            .await
            .map_err(|error| ProviderError::malformed(author_id, error.to_string()))
    }
}

impl std::fmt::Debug for OpenAlexProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexProvider")
            .field("base_url", &self.base_url)
            .field("mailto", &self.mailto)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WorksProvider for OpenAlexProvider {
    fn name(&self) -> &'static str {
        "openalex"
    }

    #[tracing::instrument(skip(self), fields(provider = "openalex", author = %author_id))]
    async fn fetch_works(&self, author_id: &str) -> Result<Vec<Work>, ProviderError> {
        let author_id = normalize_author_id(author_id);

        let mut works = Vec::new();
        let mut cursor = Some("*".to_string());

        while let Some(current) = cursor {
            let page = self.fetch_page(author_id, &current).await?;
            works.extend(page.results);

            if works.len() >= MAX_WORKS {
                warn!(
                    author = %author_id,
                    fetched = works.len(),
                    cap = MAX_WORKS,
                    "works cap reached; truncating author's publication list"
                );
                break;
            }

            cursor = page.meta.next_cursor.filter(|c| !c.is_empty());
        }

        debug!(author = %author_id, works = works.len(), "fetched all works");
        Ok(works)
    }
}

/// Strips a full OpenAlex author URL down to its bare id.
///
/// Accepts either `https://openalex.org/A5023888391` or `A5023888391`.
fn normalize_author_id(author_id: &str) -> &str {
    if author_id.starts_with("http") {
        author_id
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .unwrap_or(author_id)
    } else {
        author_id
    }
}
