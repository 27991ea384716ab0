//! Mercurial reader.
//!
//! Mercurial's store isn't parsed locally; the branch comes from `hg branch`.
//! This costs a process spawn (and Python startup) on every render, which is
//! why the `hg` segment can be dropped from the configured list.

use std::path::{Path, PathBuf};

use crate::locate::find_hg_root;
use crate::shell_exec::Cmd;

/// A located Mercurial repository.
#[derive(Debug, Clone)]
pub struct HgRepo {
    root: PathBuf,
}

impl HgRepo {
    pub fn discover(start: &Path) -> Option<Self> {
        find_hg_root(start).map(|root| Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current branch, or `None` if `hg` is missing or fails.
    pub fn branch(&self) -> Option<String> {
        let output = Cmd::new("hg")
            .arg("branch")
            .current_dir(&self.root)
            .env("HGPLAIN", "1")
            .context(self.root.display().to_string())
            .run();

        match output {
            Ok(output) if output.status.success() => {
                first_line(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                log::debug!(
                    "hg branch failed: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                None
            }
            Err(e) => {
                log::debug!("hg unavailable: {}", e);
                None
            }
        }
    }
}

fn first_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}
