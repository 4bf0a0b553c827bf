//! CLI progress callback with a stderr spinner

use crate::cli::style::{check, spinner_style, Stylize};
use anstream::eprintln;
use async_trait::async_trait;
use indicatif::ProgressBar;
use stacked_pr::error::Error;
use stacked_pr::stack::{ProgressCallback, Strategy};
use std::time::Duration;

/// Reports discovery progress on stderr, keeping stdout clean for the stack
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Start a spinner (hidden automatically when stderr is not a terminal)
    pub fn start() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }

    /// Remove the spinner line
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_strategy(&self, strategy: Strategy) {
        self.spinner.set_message(format!("Checking {strategy}..."));
    }

    async fn on_strategy_matched(&self, strategy: Strategy, count: usize) {
        self.spinner.suspend(|| {
            eprintln!(
                "{} Found {} PR{} via {}",
                check(),
                count.accent(),
                if count == 1 { "" } else { "s" },
                strategy
            );
        });
    }

    async fn on_pr_skipped(&self, number: u64, error: &Error) {
        self.spinner.suspend(|| {
            eprintln!("{}: skipping PR #{number}: {error}", "warning".warn());
        });
    }

    async fn on_message(&self, message: &str) {
        self.spinner.suspend(|| eprintln!("{}", message.muted()));
    }
}
