//! Authentication for the GitHub API
//!
//! Supports an explicit token or delegation to the `gh` CLI.

mod github;

pub use github::{get_github_auth, GitHubAuthConfig};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed on the command line
    Flag,
    /// Token from the gh CLI
    Cli,
}
