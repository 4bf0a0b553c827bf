//! CLI styling utilities
//!
//! Semantic styling via the [`Stylize`] trait with automatic terminal color
//! support detection (delegated to `owo-colors`). Only diagnostics on stderr
//! are styled; the stack itself is printed plain.
//!
//! | Method      | Color  | Semantic Use                  |
//! |-------------|--------|-------------------------------|
//! | `.accent()` | Cyan   | Counts, PR numbers            |
//! | `.warn()`   | Yellow | Skipped PRs                   |
//! | `.muted()`  | Dim    | Status messages, hints        |

use std::fmt::{self, Display};

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream, Style};
use std::sync::OnceLock;

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const WARN: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();

/// A value with semantic styling applied.
///
/// Renders with ANSI codes only when the target stream supports color
/// (`owo-colors` honors `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` and TTY
/// detection).
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style) -> Self {
        Self {
            value,
            style,
            stream: Stream::Stderr,
        }
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling on stderr.
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT)
    }

    /// Warning color (yellow) for attention-needed states.
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, WARN)
    }

    /// Muted style (dim) for secondary information.
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Success checkmark
pub const CHECK: &str = "✓";

/// Green checkmark for success states.
#[inline]
pub const fn check() -> Styled<&'static str> {
    Styled::new(CHECK, SUCCESS)
}

/// Default spinner style - cyan dots.
///
/// Template validated once on first call via `OnceLock`.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
