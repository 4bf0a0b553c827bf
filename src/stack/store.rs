//! Per-run record store
//!
//! Every PR lookup made while assembling a stack goes through here. Records
//! are fetched once, enriched with their extracted dependencies and reused for
//! the rest of the run.

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::stack::extract::extract_dependencies;
use crate::types::{PullRequest, PullRequestRecord};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Fetch-or-return-cached access to pull request records
pub struct RecordStore<'a> {
    platform: &'a dyn PlatformService,
    records: HashMap<u64, Arc<PullRequestRecord>>,
    open_prs: Option<Vec<u64>>,
}

impl<'a> RecordStore<'a> {
    /// Create an empty store over a platform service
    pub fn new(platform: &'a dyn PlatformService) -> Self {
        Self {
            platform,
            records: HashMap::new(),
            open_prs: None,
        }
    }

    /// Fetch a PR, hitting the platform only on first request
    ///
    /// Failures are not cached.
    pub async fn fetch(&mut self, number: u64) -> Result<Arc<PullRequestRecord>> {
        if let Some(record) = self.records.get(&number) {
            return Ok(Arc::clone(record));
        }

        let pr = self.platform.get_pull_request(number).await?;
        let record = Arc::new(build_record(pr));
        debug!(
            "Fetched PR #{number}: base={:?} head={:?} deps={:?}",
            record.base_ref, record.head_ref, record.dependencies
        );

        self.records.insert(number, Arc::clone(&record));
        Ok(record)
    }

    /// Numbers of all open PRs, in host order
    ///
    /// Listed once per store; later calls reuse the first successful listing.
    pub async fn list_open_numbers(&mut self) -> Result<Vec<u64>> {
        if let Some(open) = &self.open_prs {
            return Ok(open.clone());
        }

        let open = self
            .platform
            .list_open_pull_requests()
            .await
            .map_err(|e| Error::Listing(Box::new(e)))?;
        debug!("Found {} open PRs", open.len());

        self.open_prs = Some(open.clone());
        Ok(open)
    }

    /// Number of cached records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been fetched yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn build_record(pr: PullRequest) -> PullRequestRecord {
    let dependencies = extract_dependencies(&pr.body);
    PullRequestRecord {
        number: pr.number,
        title: pr.title,
        description: pr.body,
        state: pr.state,
        base_ref: pr.base_ref,
        head_ref: pr.head_ref,
        dependencies,
    }
}
