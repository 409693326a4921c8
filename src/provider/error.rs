//! Error types for works provider operations.

use thiserror::Error;

/// Errors that can occur while fetching a researcher's works.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network-level error (DNS resolution, connection refused, TLS, etc.)
    #[error("network error fetching works for {author_id}: {source}")]
    Network {
        /// The author whose fetch failed.
        author_id: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching works for {author_id}")]
    Timeout {
        /// The author whose fetch timed out.
        author_id: String,
    },

    /// The source does not know this author.
    #[error("author {author_id} not found at provider")]
    NotFound {
        /// The unknown author id.
        author_id: String,
    },

    /// The source is rate limiting us (HTTP 429).
    #[error("provider rate limit hit fetching works for {author_id}")]
    RateLimited {
        /// The author whose fetch was limited.
        author_id: String,
        /// Raw Retry-After header value, if the source sent one.
        retry_after: Option<String>,
    },

    /// Unexpected HTTP error response.
    #[error("provider returned HTTP {status} for {author_id}")]
    HttpStatus {
        /// The author whose fetch failed.
        author_id: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response body could not be interpreted.
    #[error("malformed provider response for {author_id}: {reason}")]
    Malformed {
        /// The author whose response was malformed.
        author_id: String,
        /// What was wrong with the payload.
        reason: String,
    },

    /// HTTP client construction failed.
    #[error("failed to build provider HTTP client: {reason}")]
    ClientBuild {
        /// What went wrong during construction.
        reason: String,
    },
}

impl ProviderError {
    /// Creates a network error.
    #[must_use]
    pub fn network(author_id: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            author_id: author_id.into(),
            source,
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(author_id: impl Into<String>) -> Self {
        Self::Timeout {
            author_id: author_id.into(),
        }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(author_id: impl Into<String>) -> Self {
        Self::NotFound {
            author_id: author_id.into(),
        }
    }

    /// Creates a rate-limited error with an optional Retry-After value.
    #[must_use]
    pub fn rate_limited(author_id: impl Into<String>, retry_after: Option<String>) -> Self {
        Self::RateLimited {
            author_id: author_id.into(),
            retry_after,
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http_status(author_id: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            author_id: author_id.into(),
            status,
        }
    }

    /// Creates a malformed-response error.
    #[must_use]
    pub fn malformed(author_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            author_id: author_id.into(),
            reason: reason.into(),
        }
    }
}
