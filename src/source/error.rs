//! Failure taxonomy for catalog fetches.
//!
//! The UI never shows these details; they are collapsed into
//! [`USER_ERROR_MESSAGE`] and the variant is only written to the log.

use thiserror::Error;

/// The single message the user sees for any failed fetch.
pub const USER_ERROR_MESSAGE: &str =
    "Failed to fetch products. Please check your internet connection or try again later.";

/// Why a catalog fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent, or no (complete) response arrived.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// A response arrived but its status is not a success.
    #[error("server returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The body is not JSON, or not an array of products.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The fetch task ended without producing any outcome (it panicked).
    #[error("fetch task ended without a result")]
    Interrupted,
}

impl FetchError {
    /// Short machine-friendly label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::HttpStatus(_) => "http_status",
            Self::Parse(_) => "parse",
            Self::Interrupted => "interrupted",
        }
    }
}
