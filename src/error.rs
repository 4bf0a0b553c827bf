//! Error types for stacked-pr

use thiserror::Error;

/// Errors produced while resolving, fetching or assembling a stack
#[derive(Error, Debug)]
pub enum Error {
    /// The pull request URL could not be parsed
    #[error("invalid pull request URL: {0}")]
    InvalidUrl(String),

    /// No usable credentials
    #[error("authentication error: {0}")]
    Auth(String),

    /// Non-success HTTP status from the GitHub API
    #[error("GitHub API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// GitHub client construction or other API-level failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// The pull request the run started from could not be fetched
    #[error("failed to fetch starting PR #{number}: {source}")]
    AnchorFetch {
        /// Anchor PR number
        number: u64,
        /// Underlying fetch failure
        #[source]
        source: Box<Error>,
    },

    /// Open pull requests could not be listed
    #[error("failed to list open PRs: {0}")]
    Listing(#[source] Box<Error>),

    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
