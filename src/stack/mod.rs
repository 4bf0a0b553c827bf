//! Stack discovery engine
//!
//! Turns a single anchor PR into the ordered stack it belongs to:
//! - `extract` - dependency phrases and `stack:` blocks from descriptions
//! - `store` - per-run record cache over a platform service
//! - `relations` - text dependents and branch adjacency
//! - `assemble` - the strategy fallback chain
//! - `render` - plain-text output

mod assemble;
mod extract;
mod progress;
mod relations;
mod render;
mod store;

pub use assemble::{
    assemble_stack, sort_by_branch, AssemblerConfig, Discovery, Stack, DEFAULT_BRANCH,
};
pub use extract::{extract_dependencies, extract_explicit_stack, CURRENT_MARKER};
pub use progress::{NoopProgress, ProgressCallback, Strategy};
pub use relations::{find_branch_adjacent, find_dependents};
pub use render::{annotated_line, minimal_line, render_stack, SEPARATOR};
pub use store::RecordStore;
