//! stacked-pr - discover stacked pull requests
//!
//! Reconstructs the ordered stack a GitHub pull request belongs to, using only
//! what the API exposes: description text, base/head branch names and the
//! open-PR listing.
//!
//! # Example
//!
//! ```ignore
//! use stacked_pr::platform::GitHubService;
//! use stacked_pr::stack::{assemble_stack, AssemblerConfig, NoopProgress, RecordStore};
//!
//! let service = GitHubService::new(&token, "owner".into(), "repo".into(), None)?;
//! let mut store = RecordStore::new(&service);
//! let stack = assemble_stack(&mut store, 42, &AssemblerConfig::default(), &NoopProgress).await?;
//! ```

pub mod auth;
pub mod error;
pub mod platform;
pub mod stack;
pub mod types;

pub use error::{Error, Result};
