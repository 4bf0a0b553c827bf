//! Stack assembly
//!
//! Tries each discovery strategy in precedence order and returns the first
//! stack one of them produces:
//! 1. the anchor's own `stack:` block
//! 2. a `stack:` block in another open PR that lists the anchor
//! 3. base/head branch chaining among open PRs
//! 4. dependency phrases, followed toward the base and toward the tip

use crate::error::{Error, Result};
use crate::stack::extract::extract_explicit_stack;
use crate::stack::progress::{ProgressCallback, Strategy};
use crate::stack::relations::{find_branch_adjacent, find_dependents};
use crate::stack::store::RecordStore;
use crate::types::PullRequestRecord;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Default integration branch used to order branch-ancestry stacks
pub const DEFAULT_BRANCH: &str = "main";

/// Ordered pull requests, base of the stack first
pub type Stack = Vec<Arc<PullRequestRecord>>;

/// Assembler settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Branch that roots of a branch-ancestry stack target
    pub default_branch: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Assemble the stack containing `anchor`
///
/// Only a failure to fetch the anchor itself, or to list open PRs once a
/// strategy needs the listing, is fatal. Other PRs that cannot be fetched are
/// reported through `progress` and left out.
pub async fn assemble_stack(
    store: &mut RecordStore<'_>,
    anchor: u64,
    config: &AssemblerConfig,
    progress: &dyn ProgressCallback,
) -> Result<Stack> {
    let anchor_record = store.fetch(anchor).await.map_err(|e| Error::AnchorFetch {
        number: anchor,
        source: Box::new(e),
    })?;

    let mut discovery = Discovery {
        store,
        anchor: anchor_record,
        config,
        progress,
    };

    for strategy in Strategy::ALL {
        progress.on_strategy(strategy).await;
        if let Some(stack) = discovery.run(strategy).await? {
            debug!("Strategy '{strategy}' produced {} PRs", stack.len());
            progress.on_strategy_matched(strategy, stack.len()).await;
            return Ok(stack);
        }
        debug!("Strategy '{strategy}' found nothing");
    }

    Ok(vec![discovery.anchor])
}

/// State shared by the discovery strategies for one run
pub struct Discovery<'a, 'p> {
    /// Record cache for this run
    pub store: &'a mut RecordStore<'p>,
    /// The PR the run started from
    pub anchor: Arc<PullRequestRecord>,
    /// Assembler settings
    pub config: &'a AssemblerConfig,
    /// Receives skip notices
    pub progress: &'a dyn ProgressCallback,
}

impl Discovery<'_, '_> {
    /// Evaluate a single strategy
    pub async fn run(&mut self, strategy: Strategy) -> Result<Option<Stack>> {
        match strategy {
            Strategy::OwnExplicitStack => Ok(self.own_explicit_stack().await),
            Strategy::ForeignExplicitStack => self.foreign_explicit_stack().await,
            Strategy::BranchAncestry => self.branch_ancestry().await,
            Strategy::TextDependencies => self.text_dependencies().await.map(Some),
        }
    }

    /// The anchor's own `stack:` block, in listed order
    ///
    /// Any block with at least two entries wins, even one that leaves the anchor
    /// out. Never lists open PRs.
    pub async fn own_explicit_stack(&mut self) -> Option<Stack> {
        let explicit = extract_explicit_stack(&self.anchor.description)?;

        if explicit.numbers.len() < 2 {
            debug!(
                "Ignoring stack block in #{}: {:?}",
                self.anchor.number, explicit.numbers
            );
            return None;
        }

        if !explicit.contains(self.anchor.number) {
            debug!("Stack block in #{} does not list itself", self.anchor.number);
        }
        if let Some(marked) = explicit.current_index.and_then(|i| explicit.numbers.get(i)) {
            if *marked != self.anchor.number {
                debug!(
                    "Stack block in #{} marks #{marked} as current",
                    self.anchor.number
                );
            }
        }

        Some(self.fetch_listed(&explicit.numbers).await)
    }

    /// The first open PR whose `stack:` block lists the anchor
    ///
    /// Open PRs are searched in listing order.
    pub async fn foreign_explicit_stack(&mut self) -> Result<Option<Stack>> {
        let anchor = self.anchor.number;
        let open = self.store.list_open_numbers().await?;

        for number in open {
            if number == anchor {
                continue;
            }

            let pr = match self.store.fetch(number).await {
                Ok(pr) => pr,
                Err(e) => {
                    debug!("Ignoring PR #{number} while looking for stack blocks: {e}");
                    continue;
                }
            };

            let Some(explicit) = extract_explicit_stack(&pr.description) else {
                continue;
            };
            if explicit.numbers.len() >= 2 && explicit.contains(anchor) {
                debug!("Found #{anchor} in stack block of #{number}");
                return Ok(Some(self.fetch_listed(&explicit.numbers).await));
            }
        }

        Ok(None)
    }

    /// PRs chained to the anchor by base/head branch names
    ///
    /// Roots targeting the default branch come first, then ascending numbers.
    pub async fn branch_ancestry(&mut self) -> Result<Option<Stack>> {
        let open = self.store.list_open_numbers().await?;
        let anchor = Arc::clone(&self.anchor);

        if find_branch_adjacent(self.store, &anchor, &open).await.is_empty() {
            return Ok(None);
        }

        let mut stack = Stack::new();
        let mut visited: HashSet<u64> = HashSet::new();
        let mut worklist = vec![anchor.number];

        while let Some(number) = worklist.pop() {
            if !visited.insert(number) {
                continue;
            }

            let pr = match self.store.fetch(number).await {
                Ok(pr) => pr,
                Err(e) => {
                    self.skip(number, &e).await;
                    continue;
                }
            };
            stack.push(Arc::clone(&pr));

            let adjacent = find_branch_adjacent(self.store, &pr, &open).await;
            worklist.extend(adjacent.into_iter().rev().filter(|n| !visited.contains(n)));
        }

        if stack.len() < 2 {
            return Ok(None);
        }

        sort_by_branch(&mut stack, &self.config.default_branch);
        Ok(Some(stack))
    }

    /// PRs linked to the anchor by dependency phrases, in either direction
    ///
    /// Sorted by how many distinct dependencies each PR names, fewest first.
    /// A PR that repeats the same reference counts it once, so a description
    /// saying "depends on #1" twice ranks like one saying it once. That is a
    /// heuristic for distance from the base, not a topological order, and can
    /// misplace PRs whose descriptions are incomplete.
    pub async fn text_dependencies(&mut self) -> Result<Stack> {
        let open = self.store.list_open_numbers().await?;

        let mut stack = Stack::new();
        let mut visited: HashSet<u64> = HashSet::new();
        let mut worklist = vec![self.anchor.number];

        while let Some(number) = worklist.pop() {
            if !visited.insert(number) {
                continue;
            }

            let pr = match self.store.fetch(number).await {
                Ok(pr) => pr,
                Err(e) => {
                    self.skip(number, &e).await;
                    continue;
                }
            };
            stack.push(Arc::clone(&pr));

            // Popped last-in first: dependencies are expanded before dependents.
            let dependents = find_dependents(self.store, number, &open).await;
            worklist.extend(dependents.into_iter().rev().filter(|n| !visited.contains(n)));
            worklist.extend(
                pr.dependencies
                    .iter()
                    .rev()
                    .copied()
                    .filter(|n| !visited.contains(n)),
            );
        }

        stack.sort_by_key(|pr| pr.dependencies.len());
        Ok(stack)
    }

    /// Fetch listed PRs in order, dropping repeats and unfetchable entries
    async fn fetch_listed(&mut self, numbers: &[u64]) -> Stack {
        let mut seen: HashSet<u64> = HashSet::new();
        let mut stack = Stack::new();

        for &number in numbers {
            if !seen.insert(number) {
                continue;
            }
            match self.store.fetch(number).await {
                Ok(pr) => stack.push(pr),
                Err(e) => self.skip(number, &e).await,
            }
        }

        stack
    }

    async fn skip(&self, number: u64, error: &Error) {
        warn!("Skipping PR #{number}: {error}");
        self.progress.on_pr_skipped(number, error).await;
    }
}

/// Default-branch roots first, then ascending PR number
pub fn sort_by_branch(stack: &mut [Arc<PullRequestRecord>], default_branch: &str) {
    stack.sort_by_key(|pr| (pr.base_ref != default_branch, pr.number));
}
