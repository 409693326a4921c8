//! Works provider boundary - fetching publication records for researchers.
//!
//! The history engine consumes works (publication year + citation count)
//! through the [`WorksProvider`] trait; [`OpenAlexProvider`] is the
//! production implementation. Requests are paced through a shared
//! [`RateLimiter`] because the upstream source enforces a bounded request
//! rate.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use citetrack_core::provider::{OpenAlexProvider, RateLimiter, WorksProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let limiter = Arc::new(RateLimiter::new(Duration::from_millis(110)));
//! let provider = OpenAlexProvider::new("metrics@example.com", limiter)?;
//! let works = provider.fetch_works("A5023888391").await?;
//! println!("fetched {} works", works.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod http_client;
mod openalex;
mod rate_limiter;
mod work;

pub use error::ProviderError;
pub use http_client::{build_provider_http_client, provider_user_agent};
pub use openalex::OpenAlexProvider;
pub use rate_limiter::{RateLimiter, extract_host, parse_retry_after};
pub use work::Work;

use async_trait::async_trait;

/// Supplies a researcher's complete publication list.
///
/// Implementations are expected to be expensive and rate limited; callers
/// fetch a researcher's works exactly once per processing pass and never
/// persist them.
#[async_trait]
pub trait WorksProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetches every work for the given author id.
    ///
    /// The id may be a bare external id or a full source URL.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] describing the failure; callers classify it
    /// for retry decisions.
    async fn fetch_works(&self, author_id: &str) -> Result<Vec<Work>, ProviderError>;
}
