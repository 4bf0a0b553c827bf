//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or a test) observe which discovery strategy is running and
//! which PRs were dropped from the result.

use crate::error::Error;
use async_trait::async_trait;
use std::fmt;

/// Discovery strategy, in the order the assembler tries them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `stack:` block in the anchor's own description
    OwnExplicitStack,
    /// `stack:` block in another open PR that lists the anchor
    ForeignExplicitStack,
    /// Base/head branch chaining among open PRs
    BranchAncestry,
    /// Dependency phrases, followed in both directions
    TextDependencies,
}

impl Strategy {
    /// Fallback chain, highest precedence first
    pub const ALL: [Self; 4] = [
        Self::OwnExplicitStack,
        Self::ForeignExplicitStack,
        Self::BranchAncestry,
        Self::TextDependencies,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OwnExplicitStack => write!(f, "explicit stack in PR description"),
            Self::ForeignExplicitStack => write!(f, "explicit stack in another open PR"),
            Self::BranchAncestry => write!(f, "branch ancestry"),
            Self::TextDependencies => write!(f, "dependency references"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive updates during stack discovery.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called before a strategy is evaluated
    async fn on_strategy(&self, strategy: Strategy);

    /// Called when a strategy produced the final stack
    async fn on_strategy_matched(&self, strategy: Strategy, count: usize);

    /// Called when a PR is left out of the result because it could not be fetched
    async fn on_pr_skipped(&self, number: u64, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_strategy(&self, _strategy: Strategy) {}
    async fn on_strategy_matched(&self, _strategy: Strategy, _count: usize) {}
    async fn on_pr_skipped(&self, _number: u64, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
