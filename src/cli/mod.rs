//! CLI commands
//!
//! Command implementations for the `stacked-pr` binary.

mod analyze;
mod progress;
mod style;

pub use analyze::run_analyze;
