//! Platform services for the pull request host
//!
//! Provides the read-only interface the stack engine fetches through.

mod detection;
mod factory;
mod github;

pub use detection::parse_pr_url;
pub use factory::create_platform_service;
pub use github::{GitHubService, LIST_PAGE_SIZE};

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;

/// Platform service trait for read-only PR operations
///
/// The stack engine only ever talks to the host through this trait, so tests
/// can script responses without network access.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Fetch a single pull request by number
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;

    /// List the numbers of open pull requests, in host order (single page)
    async fn list_open_pull_requests(&self) -> Result<Vec<u64>>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
