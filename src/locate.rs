//! Upward directory search for repository and manifest markers.
//!
//! Every lookup walks from a starting directory toward the filesystem root,
//! checking each directory (the start included) for a named entry. The walk is
//! a plain loop that stops once `parent()` runs out, so it always terminates.

use std::fs;
use std::path::{Path, PathBuf};

/// What kind of filesystem entry satisfies a marker lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Dir,
    File,
    /// Either a directory or a regular file (`.git` can be both).
    Any,
}

impl MarkerKind {
    fn matches(self, path: &Path) -> bool {
        match self {
            MarkerKind::Dir => path.is_dir(),
            MarkerKind::File => path.is_file(),
            MarkerKind::Any => path.exists(),
        }
    }
}

/// Find the nearest directory at or above `start` that contains `marker`.
///
/// Returns the path of the marker entry itself (e.g. `/repo/.git`), not the
/// directory holding it.
pub fn find_upward(start: &Path, marker: &str, kind: MarkerKind) -> Option<PathBuf> {
    find_upward_any(start, &[marker], kind).map(|(_, path)| path)
}

/// Like [`find_upward`] with several candidate names.
///
/// A closer directory always wins; within one directory, `markers` are tried in
/// order. Returns the matching name with its path.
pub fn find_upward_any<'m>(
    start: &Path,
    markers: &[&'m str],
    kind: MarkerKind,
) -> Option<(&'m str, PathBuf)> {
    let mut current = Some(start);
    while let Some(dir) = current {
        for &marker in markers {
            let candidate = dir.join(marker);
            if kind.matches(&candidate) {
                return Some((marker, candidate));
            }
        }
        current = dir.parent();
    }
    None
}

/// Location of a Git repository's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitDir {
    /// Directory holding `HEAD` and the `MERGE_*` files for this checkout.
    pub git_dir: PathBuf,
    /// Directory holding the shared `config`. Differs from `git_dir` only for
    /// linked worktrees.
    pub common_dir: PathBuf,
}

impl GitDir {
    fn at(git_dir: PathBuf) -> Self {
        let common_dir = read_commondir(&git_dir).unwrap_or_else(|| git_dir.clone());
        Self {
            git_dir,
            common_dir,
        }
    }
}

/// Locate the Git metadata directory for `start`.
///
/// An explicit `override_dir` (from `GIT_DIR`) wins when it names an existing
/// directory. A relative override is resolved against the process working
/// directory, not `start`. Otherwise the nearest `.git` entry is used; a `.git` file with a
/// `gitdir:` line (submodules, linked worktrees) redirects to the named directory.
pub fn find_git_dir(start: &Path, override_dir: Option<&Path>) -> Option<GitDir> {
    if let Some(dir) = override_dir {
        let dir = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
        if dir.is_dir() {
            log::debug!("Using GIT_DIR override {}", dir.display());
            return Some(GitDir::at(dir));
        }
        log::debug!("GIT_DIR override {} is not a directory", dir.display());
    }

    let marker = find_upward(start, ".git", MarkerKind::Any)?;
    if marker.is_dir() {
        return Some(GitDir::at(marker));
    }

    let target = read_gitdir_file(&marker)?;
    if target.is_dir() {
        Some(GitDir::at(target))
    } else {
        log::debug!(
            "{} points at missing directory {}",
            marker.display(),
            target.display()
        );
        None
    }
}

/// Locate the nearest `.hg` directory. Returns the repository root (its parent).
pub fn find_hg_root(start: &Path) -> Option<PathBuf> {
    find_upward(start, ".hg", MarkerKind::Dir)
        .and_then(|marker| marker.parent().map(Path::to_path_buf))
}

/// Parse a `.git` file of the form `gitdir: <path>`.
fn read_gitdir_file(file: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(file).ok()?;
    let target = content
        .lines()
        .find_map(|line| line.trim().strip_prefix("gitdir:"))
        .map(str::trim)
        .filter(|t| !t.is_empty())?;

    let target = Path::new(target);
    if target.is_absolute() {
        Some(target.to_path_buf())
    } else {
        file.parent().map(|base| base.join(target))
    }
}

/// Linked worktrees keep a `commondir` file pointing back at the main `.git`.
fn read_commondir(git_dir: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(git_dir.join("commondir")).ok()?;
    let target = content.lines().next().map(str::trim).filter(|t| !t.is_empty())?;
    let target = Path::new(target);
    let resolved = if target.is_absolute() {
        target.to_path_buf()
    } else {
        git_dir.join(target)
    };
    Some(dunce::canonicalize(&resolved).unwrap_or(resolved))
}
