//! Terminal styling for the prompt and for diagnostics.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support on diagnostics
//! - anstyle for composable styling
//! - [`palette`] maps configured color names to anstyle colors
//! - [`compose`] assembles segments into the powerline bar

pub mod compose;
pub mod palette;

use ansi_str::AnsiStr;
use anstyle::{AnsiColor, Color, Style};
use unicode_width::UnicodeWidthStr;

pub use compose::{Segment, Symbols, compose};
pub use palette::{InvalidColorSpec, Palette, UnknownColor};

// ============================================================================
// Re-exports from anstream (auto-detecting output)
// ============================================================================

/// Auto-detecting print that respects the global color choice
pub use anstream::{print, println};

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Semantic Style Constants
// ============================================================================

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Error style with bold, for the offending value inside an error message
pub const ERROR_BOLD: Style = ERROR.bold();

/// Hint style (dimmed) - use as `{HINT}text{HINT:#}`
pub const HINT: Style = Style::new().dimmed();

/// Error emoji - use with ERROR style: `eprintln!("{ERROR_EMOJI} {ERROR}message{ERROR:#}");`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji - use with HINT style: `eprintln!("{HINT_EMOJI} {HINT}message{HINT:#}");`
pub const HINT_EMOJI: &str = "💡";

// ============================================================================
// Width measurement
// ============================================================================

/// Visible width of `s`: escape sequences stripped, wide glyphs counted twice.
pub fn visual_width(s: &str) -> usize {
    s.ansi_strip().width()
}

/// Current terminal width, if it can be determined.
///
/// `COLUMNS` wins when set (shells export it to prompt hooks, whose stdout is
/// captured and therefore not a terminal). Otherwise stderr, then stdout, are
/// queried.
pub fn terminal_width() -> Option<usize> {
    if let Some(columns) = std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|&c| c > 0)
    {
        return Some(columns);
    }

    terminal_size::terminal_size_of(std::io::stderr())
        .or_else(terminal_size::terminal_size)
        .map(|(terminal_size::Width(w), _)| w as usize)
}
