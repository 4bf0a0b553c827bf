//! Plain-text stack rendering
//!
//! Produces the annotated block, a separator, and the minimal block. Output is
//! never styled so it can be pasted into a PR description as-is.

use crate::stack::extract::CURRENT_MARKER;
use crate::types::StackEntry;
use std::fmt::Write;

/// Line between the annotated and minimal blocks
pub const SEPARATOR: &str = "--------";

/// `- #N (state): title`, marked when it is the current PR
pub fn annotated_line(entry: &StackEntry) -> String {
    let pr = &entry.record;
    format!(
        "- #{} ({}): {}{}",
        pr.number,
        pr.state,
        pr.title,
        marker(entry)
    )
}

/// `- #N`, marked when it is the current PR
pub fn minimal_line(entry: &StackEntry) -> String {
    format!("- #{}{}", entry.record.number, marker(entry))
}

/// Render both views, in the order given
pub fn render_stack(entries: &[StackEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        let _ = writeln!(out, "{}", annotated_line(entry));
    }
    let _ = writeln!(out, "{SEPARATOR}");
    for entry in entries {
        let _ = writeln!(out, "{}", minimal_line(entry));
    }

    out
}

fn marker(entry: &StackEntry) -> String {
    if entry.is_current {
        format!(" {CURRENT_MARKER}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::extract::extract_explicit_stack;
    use crate::types::{PrState, PullRequestRecord};
    use std::sync::Arc;

    fn entry(number: u64, state: PrState, title: &str, is_current: bool) -> StackEntry {
        StackEntry {
            record: Arc::new(PullRequestRecord {
                number,
                title: title.to_string(),
                description: String::new(),
                state,
                base_ref: String::new(),
                head_ref: String::new(),
                dependencies: vec![],
            }),
            is_current,
        }
    }

    fn sample() -> Vec<StackEntry> {
        vec![
            entry(10, PrState::Open, "Add parser", false),
            entry(11, PrState::Draft, "Use parser", true),
            entry(12, PrState::Closed, "Docs", false),
        ]
    }

    #[test]
    fn test_render_stack() {
        insta::assert_snapshot!(render_stack(&sample()), @r"
        - #10 (open): Add parser
        - #11 (draft): Use parser <-
        - #12 (closed): Docs
        --------
        - #10
        - #11 <-
        - #12
        ");
    }

    #[test]
    fn test_blocks_have_one_line_per_entry() {
        let entries = sample();
        let output = render_stack(&entries);
        let lines: Vec<&str> = output.lines().collect();

        let sep = lines.iter().position(|l| *l == SEPARATOR).unwrap();
        let (annotated, minimal) = (&lines[..sep], &lines[sep + 1..]);
        assert_eq!(annotated.len(), entries.len());
        assert_eq!(minimal.len(), entries.len());

        let marked = |block: &[&str]| -> Vec<usize> {
            block
                .iter()
                .enumerate()
                .filter(|(_, l)| l.ends_with(CURRENT_MARKER))
                .map(|(i, _)| i)
                .collect()
        };
        assert_eq!(marked(annotated), vec![1]);
        assert_eq!(marked(minimal), vec![1]);
    }

    #[test]
    fn test_empty_stack_is_just_separator() {
        assert_eq!(render_stack(&[]), format!("{SEPARATOR}\n"));
    }

    #[test]
    fn test_annotated_block_parses_back() {
        let entries = sample();
        let pasted: String = std::iter::once("stack:".to_string())
            .chain(entries.iter().map(annotated_line))
            .collect::<Vec<_>>()
            .join("\n");

        let explicit = extract_explicit_stack(&pasted).unwrap();
        assert_eq!(explicit.numbers, vec![10, 11, 12]);
        assert_eq!(explicit.current_index, Some(1));
    }
}
