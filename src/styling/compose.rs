//! Powerline bar composition.
//!
//! Segments are drawn as colored blocks separated by a divider glyph. Each
//! divider is tinted with the previous block's background on top of the next
//! block's background, so the previous block appears to point into the next:
//!
//! ```text
//!  ~/src/app  main → origin/main
//! λ
//! ```
//!
//! The bar may be followed by a right-aligned string (a clock), and is always
//! followed by a second line holding the prompt marker.

use std::fmt::Write as _;

use anstyle::{AnsiColor, Color, Reset, Style};
use serde::{Deserialize, Serialize};

use super::palette::{Palette, UnknownColor};
use super::visual_width;

/// Background the trailing divider is drawn against.
const TRAILING_BACKGROUND: Color = Color::Ansi(AnsiColor::Black);

/// One colored block of the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Foreground color name, resolved through the [`Palette`].
    pub fg: String,
    /// Background color name, resolved through the [`Palette`].
    pub bg: String,
    pub text: String,
    pub bold: bool,
}

impl Segment {
    pub fn new(fg: impl Into<String>, bg: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Glyphs used by the compositor and the VCS segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    /// Powerline right-pointing arrow by default.
    pub divider: String,
    pub prompt: String,
    /// Prefix for branch names; may be empty.
    pub branch: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            divider: "\u{e0b0}".to_string(),
            prompt: "λ".to_string(),
            branch: "\u{e0a0}".to_string(),
        }
    }
}

/// Everything besides the segments that affects layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Layout<'a> {
    /// Text to right-align on the bar line (e.g. the time).
    pub right: Option<&'a str>,
    /// Terminal width. Without it the right-aligned text is dropped.
    pub width: Option<usize>,
    /// Environment name shown next to the prompt marker.
    pub env_name: Option<&'a str>,
}

/// Render the bar line for `segments`. Empty input renders an empty string.
pub fn render_bar(
    segments: &[Segment],
    palette: &Palette,
    divider: &str,
) -> Result<String, UnknownColor> {
    let mut bar = String::new();
    let mut prev_bg: Option<Color> = None;

    for segment in segments {
        let fg = palette.get(&segment.fg)?;
        let bg = palette.get(&segment.bg)?;

        if let Some(prev) = prev_bg {
            let edge = Style::new().fg_color(Some(prev)).bg_color(Some(bg));
            let _ = write!(bar, "{Reset}{edge}{divider}");
        }

        let mut style = Style::new().fg_color(Some(fg)).bg_color(Some(bg));
        if segment.bold {
            style = style.bold();
        }
        let _ = write!(bar, "{style} {} ", segment.text);
        prev_bg = Some(bg);
    }

    if let Some(last) = prev_bg {
        let tail = Style::new()
            .fg_color(Some(last))
            .bg_color(Some(TRAILING_BACKGROUND));
        let _ = write!(bar, "{Reset}{tail}{divider}{Reset}");
    }

    Ok(bar)
}

/// Right-align `right` after `line` within `width` columns.
///
/// When the line is already too long a single space separates the two.
pub fn align_right(line: &str, right: &str, width: usize) -> String {
    let used = visual_width(line);
    let right_width = visual_width(right);
    let pad = width.saturating_sub(used + right_width).max(1);
    format!("{line}{}{right}", " ".repeat(pad))
}

/// The prompt marker, with the environment name when one is active.
pub fn marker_line(prompt: &str, env_name: Option<&str>) -> String {
    match env_name {
        Some(env) => format!("{prompt} ({env}) "),
        None => format!("{prompt} "),
    }
}

/// Compose the full prompt: bar line, optional right-aligned text, marker line.
///
/// With no segments only the marker line is produced. Colors are resolved
/// before anything is emitted, so an unknown name fails the whole render.
pub fn compose(
    segments: &[Segment],
    palette: &Palette,
    symbols: &Symbols,
    layout: Layout<'_>,
) -> Result<String, UnknownColor> {
    let marker = marker_line(&symbols.prompt, layout.env_name);
    if segments.is_empty() {
        return Ok(marker);
    }

    let mut bar = render_bar(segments, palette, &symbols.divider)?;
    if let (Some(right), Some(width)) = (layout.right, layout.width)
        && !right.is_empty()
    {
        bar = align_right(&bar, right, width);
    }

    Ok(format!("{bar}\n{marker}"))
}
