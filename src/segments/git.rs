//! Git status segment.

use super::{RenderContext, SegmentProvider, colored, with_symbol};
use crate::git::{BranchState, GitRepo, MergeState, RemoteTarget};
use crate::styling::Segment;

/// Color class of the git segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStatus {
    Clean,
    /// Merge in progress or staged changes.
    Dirty,
    /// No branch could be resolved.
    Critical,
}

/// Branch, merge and push target of the enclosing Git repository.
pub struct GitSegment;

impl SegmentProvider for GitSegment {
    fn resolve(&self, ctx: &RenderContext<'_>) -> Option<Segment> {
        let repo = GitRepo::discover(ctx.cwd(), ctx.git_dir_override())?;
        log::debug!("Git repository at {}", repo.git_dir().display());

        let branch = repo.branch();
        let merge = repo.merge_state();
        let remote = branch.name().and_then(|name| repo.remote_target(name));
        let index_dirty =
            ctx.config.index_enabled && !matches!(branch, BranchState::Unknown) && repo.index_dirty();

        let status = classify(&branch, merge.as_ref(), index_dirty);
        let text = with_symbol(
            &ctx.config.symbols.branch,
            &describe(&branch, merge.as_ref(), remote.as_ref()),
        );

        let colors = &ctx.config.colors;
        let pair = match status {
            GitStatus::Clean => &colors.git_clean,
            GitStatus::Dirty => &colors.git_dirty,
            GitStatus::Critical => &colors.git_critical,
        };
        Some(colored(pair, text))
    }
}

pub(super) fn classify(
    branch: &BranchState,
    merge: Option<&MergeState>,
    index_dirty: bool,
) -> GitStatus {
    if matches!(branch, BranchState::Unknown) {
        GitStatus::Critical
    } else if merge.is_some() || index_dirty {
        GitStatus::Dirty
    } else {
        GitStatus::Clean
    }
}

/// `main (merging feature) → origin/main`
pub(super) fn describe(
    branch: &BranchState,
    merge: Option<&MergeState>,
    remote: Option<&RemoteTarget>,
) -> String {
    let mut text = match branch {
        BranchState::Unknown => "branch n/a".to_string(),
        other => other.to_string(),
    };
    if let Some(merge) = merge {
        text.push_str(&format!(" (merging {merge})"));
    }
    if let Some(remote) = remote {
        text.push_str(&format!(" → {remote}"));
    }
    text
}
