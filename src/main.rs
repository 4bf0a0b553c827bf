//! stacked-pr - show the stack a GitHub pull request belongs to
//!
//! CLI binary: takes one PR URL and prints the ordered stack in two plain-text
//! views.

use anyhow::Result;
use clap::Parser;
use stacked_pr::stack::{AssemblerConfig, DEFAULT_BRANCH};
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

#[derive(Parser)]
#[command(name = "stacked-pr")]
#[command(about = "Show stacked GitHub PRs in simple text format")]
#[command(
    long_about = "Show stacked GitHub PRs in simple text format.\n\n\
                  Uses `gh auth token` unless --token is given.\n\n\
                  Example:\n  stacked-pr https://github.com/owner/repo/pull/123"
)]
#[command(version)]
struct Cli {
    /// Pull request URL (HOST/OWNER/REPO/pull/NUMBER)
    pr_url: String,

    /// GitHub personal access token (overrides the gh CLI)
    #[arg(short, long)]
    token: Option<String>,

    /// Branch the bottom of a branch-chained stack targets
    #[arg(long, default_value = DEFAULT_BRANCH)]
    default_branch: String,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::new(log_directive(cli.verbose)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AssemblerConfig {
        default_branch: cli.default_branch,
    };
    cli::run_analyze(&cli.pr_url, cli.token.as_deref(), &config).await?;

    Ok(())
}

/// Skipped PRs are reported by the CLI progress callback, so library warnings
/// only surface with `--verbose`.
fn log_directive(verbose: bool) -> &'static str {
    if verbose {
        "stacked_pr=debug"
    } else {
        "stacked_pr=error"
    }
}
