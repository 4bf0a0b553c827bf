//! Test data factories for stacked-pr types
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use stacked_pr::error::Error;
use stacked_pr::stack::{ProgressCallback, Stack, Strategy};
use stacked_pr::types::{PlatformConfig, PrState, PullRequest};
use std::sync::Mutex;

/// Create an open pull request with the given branches and description
pub fn make_pr(number: u64, base: &str, head: &str, body: &str) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR {number}"),
        body: body.to_string(),
        state: PrState::Open,
        base_ref: base.to_string(),
        head_ref: head.to_string(),
    }
}

/// Create an open PR whose branches don't chain to anything
pub fn make_text_pr(number: u64, body: &str) -> PullRequest {
    make_pr(number, &format!("base-{number}"), &format!("head-{number}"), body)
}

/// Create a GitHub platform config
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

/// PR numbers of an assembled stack, in order
pub fn numbers(stack: &Stack) -> Vec<u64> {
    stack.iter().map(|pr| pr.number).collect()
}

/// Progress callback that records what it was told
#[derive(Default)]
pub struct RecordingProgress {
    pub strategies: Mutex<Vec<Strategy>>,
    pub matched: Mutex<Vec<(Strategy, usize)>>,
    pub skipped: Mutex<Vec<u64>>,
}

impl RecordingProgress {
    /// PRs reported as skipped
    pub fn skipped(&self) -> Vec<u64> {
        self.skipped.lock().unwrap().clone()
    }

    /// Strategies evaluated, in order
    pub fn strategies(&self) -> Vec<Strategy> {
        self.strategies.lock().unwrap().clone()
    }

    /// Strategy that produced the stack, if any
    pub fn winner(&self) -> Option<Strategy> {
        self.matched.lock().unwrap().last().map(|(s, _)| *s)
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_strategy(&self, strategy: Strategy) {
        self.strategies.lock().unwrap().push(strategy);
    }

    async fn on_strategy_matched(&self, strategy: Strategy, count: usize) {
        self.matched.lock().unwrap().push((strategy, count));
    }

    async fn on_pr_skipped(&self, number: u64, _error: &Error) {
        self.skipped.lock().unwrap().push(number);
    }

    async fn on_message(&self, _message: &str) {}
}
