//! Best-effort parsing of the prompt the host shell had before decoration.
//!
//! Shells and tools decorate the prompt in loosely standard ways: virtualenv and
//! conda prepend `(name)` or `[name]`, `cmd.exe` shows `C:\path>`, POSIX shells
//! end with `$`, `#` or `%`, often after `user@host:`. These helpers recover the
//! environment name and the path so the decorated prompt can keep them.

use std::sync::LazyLock;

use regex::Regex;

/// Leading `(env)` or `[env]` decoration.
static ENV_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[(\[]([^()\[\]\s]+)[)\]]\s+").unwrap());

/// Optional `user@host:` followed by the path and a trailing prompt marker.
static PATH_BEFORE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[\w.-]+@[\w.-]+:)?\s*(?P<path>.*?)\s*[>$#%λ]\s*$").unwrap()
});

/// The prompt line that carries the decorations: the last non-blank one.
fn prompt_line(previous: &str) -> Option<&str> {
    previous.lines().rev().find(|l| !l.trim().is_empty())
}

/// Environment name from a leading `(name)` or `[name]`.
pub fn environment_name(previous: &str) -> Option<String> {
    let line = previous.lines().find(|l| !l.trim().is_empty())?;
    ENV_DECORATION
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Path portion of the prompt, with any environment decoration dropped.
pub fn working_path(previous: &str) -> Option<String> {
    let line = prompt_line(previous)?;
    let line = match ENV_DECORATION.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    PATH_BEFORE_MARKER
        .captures(line)
        .and_then(|c| c.name("path"))
        .map(|m| m.as_str().trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}
