//! Git metadata reader.
//!
//! Reads branch, merge and upstream state directly from files under the git
//! directory. The only external process is the optional index check.
//!
//! ```no_run
//! use promptline::git::GitRepo;
//!
//! if let Some(repo) = GitRepo::discover(std::path::Path::new("."), None) {
//!     println!("{}", repo.branch());
//! }
//! ```

mod head;
mod ini;

use std::fmt;
use std::fs;
use std::path::Path;

pub use head::{BranchState, MergeState, SHORT_HASH_LEN, parse_merge_heads, parse_merge_targets};
pub use ini::{IniTable, IniValue};

use crate::locate::{GitDir, find_git_dir};
use crate::shell_exec::Cmd;

/// `push.default` modes that push to a branch of the same name.
const SAME_NAME_PUSH_MODES: &[&str] = &["simple", "current", "upstream"];

/// `push.default` modes that name no single target branch.
const NO_TARGET_PUSH_MODES: &[&str] = &["matching", "nothing"];

/// Where the current branch pushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    pub remote: String,
    pub branch: Option<String>,
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Some(branch) => write!(f, "{}/{}", self.remote, branch),
            None => f.write_str(&self.remote),
        }
    }
}

/// A located Git repository.
#[derive(Debug, Clone)]
pub struct GitRepo {
    dir: GitDir,
}

impl GitRepo {
    /// Find the repository containing `start`, honoring a `GIT_DIR` override.
    pub fn discover(start: &Path, git_dir_override: Option<&Path>) -> Option<Self> {
        find_git_dir(start, git_dir_override).map(Self::at)
    }

    pub fn at(dir: GitDir) -> Self {
        Self { dir }
    }

    pub fn git_dir(&self) -> &Path {
        &self.dir.git_dir
    }

    /// Current branch from `HEAD`. Unreadable `HEAD` is [`BranchState::Unknown`].
    pub fn branch(&self) -> BranchState {
        match self.read("HEAD") {
            Some(content) => BranchState::parse(&content),
            None => BranchState::Unknown,
        }
    }

    /// Merge in progress, described by `MERGE_MSG` or else `MERGE_HEAD`.
    pub fn merge_state(&self) -> Option<MergeState> {
        let msg = self.read("MERGE_MSG");
        let head = self.read("MERGE_HEAD");
        MergeState::resolve(msg.as_deref(), head.as_deref())
    }

    /// Push target for `branch` from the repository config.
    pub fn remote_target(&self, branch: &str) -> Option<RemoteTarget> {
        let config = IniTable::load(&self.dir.common_dir.join("config"))?;
        resolve_remote_target(&config, branch)
    }

    /// Whether staged changes differ from `HEAD`.
    ///
    /// Runs `git diff-index --quiet --cached HEAD`, which exits non-zero when
    /// the index has changes (and also when `HEAD` doesn't exist yet). A tool
    /// that can't be spawned counts as clean.
    pub fn index_dirty(&self) -> bool {
        let git_dir = self.dir.git_dir.display().to_string();
        let result = Cmd::new("git")
            .arg(format!("--git-dir={git_dir}"))
            .args(["diff-index", "--quiet", "--cached", "HEAD"])
            .current_dir(&self.dir.git_dir)
            .env_remove("GIT_DIR")
            .context(git_dir)
            .run();

        match result {
            Ok(output) => !output.status.success(),
            Err(e) => {
                log::debug!("git diff-index unavailable: {}", e);
                false
            }
        }
    }

    fn read(&self, name: &str) -> Option<String> {
        let path = self.dir.git_dir.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::debug!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Resolve the push target for `branch` from a parsed config.
///
/// `branch "<branch>".remote` names the remote. The remote branch comes from
/// `remote "<remote>".push` when set, else from `push.default`. A same-name
/// target is shown as the bare remote.
pub fn resolve_remote_target(config: &IniTable, branch: &str) -> Option<RemoteTarget> {
    let remote = config
        .get_string(&format!("branch \"{branch}\""), "remote")
        .filter(|r| !r.is_empty())?;

    let explicit = config
        .get_string(&format!("remote \"{remote}\""), "push")
        .and_then(|refspec| refspec_destination(&refspec));

    let remote_branch = match explicit {
        Some(dst) => Some(dst),
        None => config
            .get_string("push", "default")
            .and_then(|mode| push_default_target(&mode, branch)),
    };

    Some(RemoteTarget {
        remote,
        branch: remote_branch,
    })
}

/// `+refs/heads/a:refs/heads/b` → `b`; `main` → `main`.
fn refspec_destination(refspec: &str) -> Option<String> {
    let refspec = refspec.trim().trim_start_matches('+');
    let dst = refspec.rsplit_once(':').map_or(refspec, |(_, dst)| dst);
    let dst = dst.strip_prefix("refs/heads/").unwrap_or(dst);
    (!dst.is_empty()).then(|| dst.to_string())
}

fn push_default_target(mode: &str, branch: &str) -> Option<String> {
    let mode = mode.trim();
    if mode.is_empty()
        || mode == branch
        || SAME_NAME_PUSH_MODES.contains(&mode)
        || NO_TARGET_PUSH_MODES.contains(&mode)
    {
        return None;
    }
    Some(mode.to_string())
}
