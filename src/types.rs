//! Core types for stacked-pr

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Pull request state as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    /// Open and ready for review
    Open,
    /// Closed or merged
    Closed,
    /// Open but marked as draft
    Draft,
}

impl PrState {
    /// Map the API's `state` string and `draft` flag to a single state
    pub fn from_api(state: &str, draft: bool) -> Self {
        if state.eq_ignore_ascii_case("closed") {
            Self::Closed
        } else if draft || state.eq_ignore_ascii_case("draft") {
            Self::Draft
        } else {
            Self::Open
        }
    }
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Draft => write!(f, "draft"),
        }
    }
}

/// A pull request as returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Raw description text (empty when the PR has no body)
    pub body: String,
    /// Open, closed or draft
    pub state: PrState,
    /// Base branch name (empty if unavailable)
    pub base_ref: String,
    /// Head branch name (empty if unavailable)
    pub head_ref: String,
}

/// A fetched pull request plus the dependencies extracted from its body
///
/// Records are created once per number per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Raw description text
    pub description: String,
    /// Open, closed or draft
    pub state: PrState,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR numbers named by dependency phrases in the description
    pub dependencies: Vec<u64>,
}

impl PullRequestRecord {
    /// Whether the description names `number` as a dependency
    pub fn depends_on(&self, number: u64) -> bool {
        self.dependencies.contains(&number)
    }
}

/// A record placed in the final ordered output
#[derive(Debug, Clone)]
pub struct StackEntry {
    /// The pull request at this position
    pub record: Arc<PullRequestRecord>,
    /// Whether this is the PR the run started from
    pub is_current: bool,
}

impl StackEntry {
    /// Mark the anchor within an ordered stack
    pub fn from_stack(stack: &[Arc<PullRequestRecord>], anchor: u64) -> Vec<Self> {
        stack
            .iter()
            .map(|record| Self {
                record: Arc::clone(record),
                is_current: record.number == anchor,
            })
            .collect()
    }
}

/// An ordered `stack:` block parsed from a description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplicitStack {
    /// PR numbers in listed order
    pub numbers: Vec<u64>,
    /// Index of the entry marked as current, if any
    pub current_index: Option<usize>,
}

impl ExplicitStack {
    /// Whether `number` is listed in the block
    pub fn contains(&self, number: u64) -> bool {
        self.numbers.contains(&number)
    }
}

/// Repository coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

/// A parsed pull request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrUrl {
    /// Repository the PR belongs to
    pub config: PlatformConfig,
    /// PR number
    pub number: u64,
}
