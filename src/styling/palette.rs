//! Named color table.
//!
//! Segments refer to colors by name so the configuration can restyle them.
//! The palette resolves those names once per render; an unknown name is a
//! configuration error and aborts rendering.

use std::collections::HashMap;
use std::fmt;

use anstyle::{AnsiColor, Color, RgbColor};

use super::{ERROR, ERROR_BOLD, ERROR_EMOJI, HINT, HINT_EMOJI};

const BUILTIN: &[(&str, AnsiColor)] = &[
    ("black", AnsiColor::Black),
    ("red", AnsiColor::Red),
    ("green", AnsiColor::Green),
    ("yellow", AnsiColor::Yellow),
    ("blue", AnsiColor::Blue),
    ("magenta", AnsiColor::Magenta),
    ("cyan", AnsiColor::Cyan),
    ("white", AnsiColor::White),
    ("bright_black", AnsiColor::BrightBlack),
    ("bright_red", AnsiColor::BrightRed),
    ("bright_green", AnsiColor::BrightGreen),
    ("bright_yellow", AnsiColor::BrightYellow),
    ("bright_blue", AnsiColor::BrightBlue),
    ("bright_magenta", AnsiColor::BrightMagenta),
    ("bright_cyan", AnsiColor::BrightCyan),
    ("bright_white", AnsiColor::BrightWhite),
];

/// A color name that isn't in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor {
    pub name: String,
}

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        write!(
            f,
            "{ERROR_EMOJI} {ERROR}Unknown color {ERROR_BOLD}{name}{ERROR_BOLD:#}{ERROR} in color table{ERROR:#}\n\n{HINT_EMOJI} {HINT}Use a basic color name (e.g. bright_blue) or define it under [palette]{HINT:#}"
        )
    }
}

impl std::error::Error for UnknownColor {}

/// A palette entry that couldn't be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorSpec {
    pub name: String,
    pub spec: String,
}

impl fmt::Display for InvalidColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let InvalidColorSpec { name, spec } = self;
        write!(
            f,
            "{ERROR_EMOJI} {ERROR}Palette entry {ERROR_BOLD}{name}{ERROR_BOLD:#}{ERROR} has invalid value {spec:?}{ERROR:#}\n\n{HINT_EMOJI} {HINT}Expected #rrggbb, a number 0-255, or another color name{HINT:#}"
        )
    }
}

impl std::error::Error for InvalidColorSpec {}

/// Color name → terminal color.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = BUILTIN
            .iter()
            .map(|(name, color)| (name.to_string(), Color::Ansi(*color)))
            .collect();
        Self { colors }
    }
}

impl Palette {
    /// Built-in names extended with user entries.
    ///
    /// Entries are `#rrggbb`, an ANSI-256 index, or the name of a built-in
    /// color (aliases).
    pub fn with_entries<'a, I>(entries: I) -> Result<Self, InvalidColorSpec>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut palette = Self::default();
        for (name, spec) in entries {
            let color = palette
                .parse_spec(spec)
                .ok_or_else(|| InvalidColorSpec {
                    name: name.clone(),
                    spec: spec.clone(),
                })?;
            palette.colors.insert(normalize(name), color);
        }
        Ok(palette)
    }

    /// Resolve a color name. Names are case-insensitive and `-`/`_` agnostic.
    pub fn get(&self, name: &str) -> Result<Color, UnknownColor> {
        self.colors
            .get(&normalize(name))
            .copied()
            .ok_or_else(|| UnknownColor {
                name: name.to_string(),
            })
    }

    fn parse_spec(&self, spec: &str) -> Option<Color> {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Ok(index) = spec.parse::<u8>() {
            return Some(Color::Ansi256(index.into()));
        }
        self.colors.get(&normalize(spec)).copied()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(RgbColor(channel(0)?, channel(2)?, channel(4)?)))
}
