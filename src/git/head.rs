//! Parsers for `HEAD`, `MERGE_MSG` and `MERGE_HEAD`.
//!
//! These operate on file contents so they can be tested without a repository;
//! [`super::GitRepo`] does the reading.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Length of an abbreviated commit hash.
pub const SHORT_HASH_LEN: usize = 7;

const HEAD_REF_PREFIX: &str = "ref: refs/heads/";

/// `'token'` spans in a merge message.
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'([^']*)'").unwrap());

/// What `HEAD` points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchState {
    Named(String),
    Detached(String),
    Unknown,
}

impl BranchState {
    /// Interpret the contents of a `HEAD` file.
    pub fn parse(content: &str) -> Self {
        let Some(first) = content.lines().next().map(str::trim) else {
            return BranchState::Unknown;
        };
        if first.is_empty() {
            return BranchState::Unknown;
        }
        match first.strip_prefix(HEAD_REF_PREFIX) {
            Some(name) if !name.is_empty() => BranchState::Named(name.to_string()),
            Some(_) => BranchState::Unknown,
            None => BranchState::Detached(short_hash(first).to_string()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            BranchState::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for BranchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchState::Named(name) => f.write_str(name),
            BranchState::Detached(hash) => f.write_str(hash),
            BranchState::Unknown => f.write_str("n/a"),
        }
    }
}

/// An in-progress merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeState {
    /// Names quoted in `MERGE_MSG` (`Merge branch 'feature'`).
    Targets(Vec<String>),
    /// Abbreviated hashes from `MERGE_HEAD`, one per merged head.
    Heads(Vec<String>),
}

impl MergeState {
    /// Pick the merge description from whichever files are present.
    ///
    /// Quoted targets from the message take priority over raw heads.
    pub fn resolve(merge_msg: Option<&str>, merge_head: Option<&str>) -> Option<Self> {
        if let Some(targets) = merge_msg.and_then(parse_merge_targets) {
            return Some(MergeState::Targets(targets));
        }
        merge_head.and_then(parse_merge_heads).map(MergeState::Heads)
    }

    pub fn entries(&self) -> &[String] {
        match self {
            MergeState::Targets(v) | MergeState::Heads(v) => v,
        }
    }
}

impl fmt::Display for MergeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries().join(", "))
    }
}

/// Every single-quoted token on the first line of `MERGE_MSG`.
pub fn parse_merge_targets(merge_msg: &str) -> Option<Vec<String>> {
    let first = merge_msg.lines().next()?;
    let targets: Vec<String> = QUOTED
        .captures_iter(first)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    (!targets.is_empty()).then_some(targets)
}

/// Each non-empty `MERGE_HEAD` line, abbreviated.
pub fn parse_merge_heads(merge_head: &str) -> Option<Vec<String>> {
    let heads: Vec<String> = merge_head
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| short_hash(l).to_string())
        .collect();
    (!heads.is_empty()).then_some(heads)
}

fn short_hash(s: &str) -> &str {
    match s.char_indices().nth(SHORT_HASH_LEN) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
