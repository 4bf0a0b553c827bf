//! Default command - discover and print the stack for a PR URL

use crate::cli::progress::CliProgress;
use anstream::{print, println};
use stacked_pr::error::Result;
use stacked_pr::platform::{create_platform_service, parse_pr_url};
use stacked_pr::stack::{
    assemble_stack, render_stack, AssemblerConfig, ProgressCallback, RecordStore,
};
use stacked_pr::types::StackEntry;

/// Run stack discovery for `pr_url` and print both views to stdout
///
/// URL and credential problems are reported before any request is made.
pub async fn run_analyze(
    pr_url: &str,
    token: Option<&str>,
    config: &AssemblerConfig,
) -> Result<()> {
    let pr = parse_pr_url(pr_url)?;
    let platform = create_platform_service(&pr.config, token).await?;

    let repo = platform.config();
    let progress = CliProgress::start();
    progress
        .on_message(&format!(
            "Analyzing {}/{} #{}...",
            repo.owner, repo.repo, pr.number
        ))
        .await;

    let mut store = RecordStore::new(platform.as_ref());
    let result = assemble_stack(&mut store, pr.number, config, &progress).await;
    progress.finish();
    let stack = result?;

    println!("stack:");
    print!("{}", render_stack(&StackEntry::from_stack(&stack, pr.number)));

    Ok(())
}
