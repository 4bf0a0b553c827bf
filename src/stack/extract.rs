//! Dependency extraction from PR descriptions
//!
//! Two independent passes over the raw text: dependency phrases ("depends on
//! #12") and an explicit `stack:` block. Both are pure.

use crate::types::ExplicitStack;
use regex::Regex;
use std::sync::LazyLock;

/// Marker that flags the current PR inside a `stack:` block
pub const CURRENT_MARKER: &str = "<-";

static DEPENDENCY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)depends\s+on\s+#(\d+)",
        r"(?i)based\s+on\s+#(\d+)",
        r"(?i)stacked\s+on\s+#(\d+)",
        r"(?i)builds?\s+on\s+#(\d+)",
        r"(?i)requires?\s+#(\d+)",
        r"(?i)follows?\s+#(\d+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("hardcoded dependency pattern is valid"))
    .collect()
});

// Header, optional blank lines, then one or more list items carrying a #N.
static STACK_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)stack:[ \t]*\r?\n((?:(?:[ \t]*\r?\n)*[ \t]*[-*+][ \t]*#\d+[^\n]*(?:\n|$))+)",
    )
    .expect("hardcoded stack block pattern is valid")
});

static PR_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("hardcoded PR reference pattern is valid"));

/// Extract PR numbers named by dependency phrases
///
/// Order is pattern order, then left to right; repeats are dropped after their
/// first occurrence.
pub fn extract_dependencies(text: &str) -> Vec<u64> {
    let mut deps: Vec<u64> = Vec::new();

    for pattern in DEPENDENCY_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(number) = caps.get(1).and_then(|m| m.as_str().parse().ok()) else {
                continue;
            };
            if !deps.contains(&number) {
                deps.push(number);
            }
        }
    }

    deps
}

/// Parse the first `stack:` block in a description
///
/// Returns `None` when there is no block.
pub fn extract_explicit_stack(text: &str) -> Option<ExplicitStack> {
    let block = STACK_BLOCK.captures(text)?.get(1)?.as_str();

    let mut stack = ExplicitStack::default();
    for line in block.lines() {
        let Some(number) = PR_REFERENCE
            .captures(line)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
        else {
            continue;
        };

        if stack.current_index.is_none() && line.contains(CURRENT_MARKER) {
            stack.current_index = Some(stack.numbers.len());
        }
        stack.numbers.push(number);
    }

    (!stack.numbers.is_empty()).then_some(stack)
}
