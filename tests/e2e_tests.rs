//! End-to-end test with the real GitHub API
//!
//! Requires:
//! - `STACKED_PR_E2E_URL` set to a PR that belongs to a stack of 2+ PRs
//! - `gh` CLI authenticated
//!
//! Run with: `STACKED_PR_E2E_URL=... cargo test --test e2e_tests -- --include-ignored`

use stacked_pr::platform::{create_platform_service, parse_pr_url};
use stacked_pr::stack::{assemble_stack, AssemblerConfig, NoopProgress, RecordStore};
use std::env;

#[tokio::test]
#[ignore = "needs network access and gh authentication"]
async fn test_real_stack_contains_anchor() {
    let Ok(url) = env::var("STACKED_PR_E2E_URL") else {
        eprintln!("STACKED_PR_E2E_URL not set, skipping");
        return;
    };

    let pr = parse_pr_url(&url).unwrap();
    let platform = create_platform_service(&pr.config, None).await.unwrap();
    let mut store = RecordStore::new(platform.as_ref());

    let config = AssemblerConfig::default();
    let stack = assemble_stack(&mut store, pr.number, &config, &NoopProgress)
        .await
        .unwrap();

    assert!(stack.len() >= 2, "expected a stack, got {} PR(s)", stack.len());
    assert!(stack.iter().any(|record| record.number == pr.number));
}
