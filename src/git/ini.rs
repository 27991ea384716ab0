//! Minimal reader for git-style config files.
//!
//! Handles the subset of the format the prompt needs: `[section]` and
//! `[section "subsection"]` headers, `key = value` pairs, `#`/`;` comments and
//! double-quoted values. Values are coerced once at parse time.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// A config value after type coercion.
///
/// Coercion order is fixed: a value that parses as a number is a number, then
/// the literals `true`/`false` are booleans, and anything else stays a string.
/// Numbers keep their source text, so `1.10` and `007` read back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum IniValue {
    Number { value: f64, raw: String },
    Bool(bool),
    Str(String),
}

impl IniValue {
    fn coerce(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<f64>()
            && value.is_finite()
        {
            return IniValue::Number {
                value,
                raw: raw.to_string(),
            };
        }
        match raw {
            "true" => IniValue::Bool(true),
            "false" => IniValue::Bool(false),
            _ => IniValue::Str(raw.to_string()),
        }
    }
}

impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniValue::Number { raw, .. } => f.write_str(raw),
            IniValue::Bool(b) => write!(f, "{b}"),
            IniValue::Str(s) => f.write_str(s),
        }
    }
}

/// Two-level section → key → value table.
///
/// Section keys are normalized to `name` or `name "subsection"`, with the
/// name lowercased and the subsection kept verbatim. Keys are lowercased.
#[derive(Debug, Clone, Default)]
pub struct IniTable {
    sections: HashMap<String, HashMap<String, IniValue>>,
}

impl IniTable {
    /// Read and parse `path`. Returns `None` when the file can't be read.
    pub fn load(path: &Path) -> Option<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Some(Self::parse(&content)),
            Err(e) => {
                log::debug!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        let mut table = Self::default();
        let mut current: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                current = header
                    .split_once(']')
                    .and_then(|(inner, _)| normalize_section(inner));
                continue;
            }

            let Some(section) = &current else {
                continue;
            };

            // A bare key with no `=` is git's shorthand for `key = true`
            let (key, raw) = match line.split_once('=') {
                Some((k, v)) => (k.trim(), strip_value(v)),
                None => (line, "true".to_string()),
            };
            if key.is_empty() {
                continue;
            }

            table
                .sections
                .entry(section.clone())
                .or_default()
                .insert(key.to_ascii_lowercase(), IniValue::coerce(&raw));
        }

        table
    }

    /// Look up a key. `section` uses the header spelling, e.g. `branch "main"`.
    pub fn get(&self, section: &str, key: &str) -> Option<&IniValue> {
        let section = normalize_section(section)?;
        self.sections
            .get(&section)?
            .get(&key.to_ascii_lowercase())
    }

    /// Like [`IniTable::get`] but returns the value as written.
    pub fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.get(section, key).map(ToString::to_string)
    }
}

/// `Branch  "Main"` → `branch "Main"`; `core` → `core`.
fn normalize_section(inner: &str) -> Option<String> {
    let inner = inner.trim();
    if inner.is_empty() {
        return None;
    }
    match inner.split_once(char::is_whitespace) {
        Some((name, sub)) => {
            let sub = sub.trim().trim_matches('"');
            Some(format!("{} \"{}\"", name.to_ascii_lowercase(), sub))
        }
        None => Some(inner.to_ascii_lowercase()),
    }
}

/// Drop trailing comments and surrounding quotes from a raw value.
fn strip_value(raw: &str) -> String {
    let raw = raw.trim();
    if let Some(quoted) = raw.strip_prefix('"')
        && let Some(end) = quoted.find('"')
    {
        return quoted[..end].to_string();
    }
    let end = raw.find([';', '#']).unwrap_or(raw.len());
    raw[..end].trim_end().to_string()
}
