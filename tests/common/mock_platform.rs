//! Mock platform service for testing
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use stacked_pr::error::{Error, Result};
use stacked_pr::platform::PlatformService;
use stacked_pr::types::{PlatformConfig, PullRequest};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Scripted, read-only platform service
///
/// Features:
/// - PRs served from an in-memory map (unknown numbers return 404)
/// - Scripted open-PR listing, in insertion order
/// - Call tracking for verification
/// - Error injection per PR and for the listing
pub struct MockPlatformService {
    config: PlatformConfig,
    prs: Mutex<HashMap<u64, PullRequest>>,
    open: Mutex<Vec<u64>>,
    // Call tracking
    get_calls: Mutex<Vec<u64>>,
    list_calls: Mutex<usize>,
    // Error injection
    failing_prs: Mutex<HashSet<u64>>,
    error_on_list: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            prs: Mutex::new(HashMap::new()),
            open: Mutex::new(Vec::new()),
            get_calls: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
            failing_prs: Mutex::new(HashSet::new()),
            error_on_list: Mutex::new(None),
        }
    }

    /// Serve `pr` and include it in the open listing
    pub fn add_open_pr(&self, pr: PullRequest) {
        self.open.lock().unwrap().push(pr.number);
        self.add_pr(pr);
    }

    /// Serve `pr` without listing it as open
    pub fn add_pr(&self, pr: PullRequest) {
        self.prs.lock().unwrap().insert(pr.number, pr);
    }

    /// List `number` as open even though fetching it fails
    pub fn list_unfetchable(&self, number: u64) {
        self.open.lock().unwrap().push(number);
        self.fail_pr(number);
    }

    // === Error injection methods ===

    /// Make `get_pull_request(number)` fail with a server error
    pub fn fail_pr(&self, number: u64) {
        self.failing_prs.lock().unwrap().insert(number);
    }

    /// Make `list_open_pull_requests` fail
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All numbers `get_pull_request` was called with, in order
    pub fn get_calls(&self) -> Vec<u64> {
        self.get_calls.lock().unwrap().clone()
    }

    /// How many times `get_pull_request` was called for `number`
    pub fn get_call_count(&self, number: u64) -> usize {
        self.get_calls().iter().filter(|n| **n == number).count()
    }

    /// How many times the open listing was requested
    pub fn list_call_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        self.get_calls.lock().unwrap().push(number);

        if self.failing_prs.lock().unwrap().contains(&number) {
            return Err(Error::Api {
                status: 502,
                message: "Bad Gateway".to_string(),
            });
        }

        self.prs
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn list_open_pull_requests(&self) -> Result<Vec<u64>> {
        *self.list_calls.lock().unwrap() += 1;

        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::Api {
                status: 500,
                message: msg.clone(),
            });
        }

        Ok(self.open.lock().unwrap().clone())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
