//! Relationship finders over a pool of candidate PRs
//!
//! Candidates that fail to fetch are left out; a partial answer beats none.

use crate::stack::store::RecordStore;
use crate::types::PullRequestRecord;
use tracing::debug;

/// Candidates whose description names `target` as a dependency, in pool order
pub async fn find_dependents(
    store: &mut RecordStore<'_>,
    target: u64,
    candidates: &[u64],
) -> Vec<u64> {
    let mut dependents = Vec::new();

    for &number in candidates {
        if number == target {
            continue;
        }

        match store.fetch(number).await {
            Ok(pr) if pr.depends_on(target) => dependents.push(number),
            Ok(_) => {}
            Err(e) => debug!("Ignoring PR #{number} while looking for dependents: {e}"),
        }
    }

    dependents
}

/// Candidates stacked directly on or under `target` by branch name
///
/// A candidate is adjacent when its base is the target's head (it sits on top
/// of the target) or its head is the target's base (the target sits on it).
/// Empty branch names never match.
pub async fn find_branch_adjacent(
    store: &mut RecordStore<'_>,
    target: &PullRequestRecord,
    candidates: &[u64],
) -> Vec<u64> {
    let mut adjacent = Vec::new();

    for &number in candidates {
        if number == target.number {
            continue;
        }

        match store.fetch(number).await {
            Ok(pr) if is_branch_adjacent(target, &pr) => adjacent.push(number),
            Ok(_) => {}
            Err(e) => debug!("Ignoring PR #{number} while matching branches: {e}"),
        }
    }

    adjacent
}

fn is_branch_adjacent(target: &PullRequestRecord, candidate: &PullRequestRecord) -> bool {
    let stacked_on_target = !target.head_ref.is_empty() && candidate.base_ref == target.head_ref;
    let target_stacked_on = !target.base_ref.is_empty() && candidate.head_ref == target.base_ref;
    stacked_on_target || target_stacked_on
}
