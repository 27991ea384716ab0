//! Segment providers.
//!
//! Each provider inspects the render context and either produces one
//! [`Segment`] or nothing. Providers run in the configured order, strictly one
//! after another; a provider that produces nothing is skipped without
//! affecting its neighbors.

mod admin;
mod cwd;
mod git;
mod hg;
mod package;

use std::path::{Path, PathBuf};

use crate::config::{ColorPair, PromptConfig, SegmentKind};
use crate::styling::Segment;

pub use admin::AdminSegment;
pub use cwd::{CwdSegment, tilde_path};
pub use git::{GitSegment, GitStatus};
pub use hg::HgSegment;
pub use package::PackageSegment;

/// Environment variable that points git at a metadata directory directly.
pub const GIT_DIR_ENV_VAR: &str = "GIT_DIR";

/// Everything a provider may look at during one render.
///
/// Built once from the process environment by [`RenderContext::from_env`];
/// providers only read it.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub config: &'a PromptConfig,
    pub cwd: PathBuf,
    pub home: Option<PathBuf>,
    /// The prompt string the host shell had before decoration.
    pub previous_prompt: Option<String>,
    pub git_dir_override: Option<PathBuf>,
    pub is_admin: bool,
}

impl<'a> RenderContext<'a> {
    /// A context with nothing taken from the environment.
    pub fn new(config: &'a PromptConfig, cwd: impl Into<PathBuf>) -> Self {
        Self {
            config,
            cwd: cwd.into(),
            home: None,
            previous_prompt: None,
            git_dir_override: None,
            is_admin: false,
        }
    }

    /// Read `HOME`, `GIT_DIR` and the admin flag from the process environment.
    ///
    /// A relative `GIT_DIR` is taken relative to the process working directory,
    /// as git does.
    pub fn from_env(
        config: &'a PromptConfig,
        cwd: impl Into<PathBuf>,
        previous_prompt: Option<String>,
    ) -> Self {
        let git_dir_override = std::env::var_os(GIT_DIR_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(|v| std::path::absolute(&v).unwrap_or_else(|_| PathBuf::from(v)));
        let is_admin = std::env::var(&config.admin_env_var)
            .map(|v| flag_is_set(&v))
            .unwrap_or(false);

        Self {
            home: home::home_dir(),
            previous_prompt: previous_prompt.filter(|p| !p.trim().is_empty()),
            git_dir_override,
            is_admin,
            ..Self::new(config, cwd)
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn git_dir_override(&self) -> Option<&Path> {
        self.git_dir_override.as_deref()
    }
}

/// A source of one prompt segment.
///
/// Implementations may read files and run at most one external command, must
/// not mutate shared state, and should return quickly: every provider runs on
/// every prompt.
pub trait SegmentProvider {
    fn resolve(&self, ctx: &RenderContext<'_>) -> Option<Segment>;
}

/// The provider for a configured segment kind.
pub fn provider(kind: SegmentKind) -> Box<dyn SegmentProvider> {
    match kind {
        SegmentKind::Admin => Box::new(AdminSegment),
        SegmentKind::Cwd => Box::new(CwdSegment),
        SegmentKind::Package => Box::new(PackageSegment),
        SegmentKind::Git => Box::new(GitSegment),
        SegmentKind::Hg => Box::new(HgSegment),
    }
}

/// Run the configured providers in order, keeping the segments they produce.
pub fn resolve_all(ctx: &RenderContext<'_>) -> Vec<Segment> {
    ctx.config
        .segments
        .iter()
        .filter_map(|&kind| {
            let segment = provider(kind).resolve(ctx);
            if segment.is_none() {
                log::debug!("Segment {} produced nothing", kind);
            }
            segment
        })
        .collect()
}

fn colored(pair: &ColorPair, text: impl Into<String>) -> Segment {
    Segment::new(pair.fg.clone(), pair.bg.clone(), text)
}

/// Prefix `text` with a symbol unless the symbol is empty.
fn with_symbol(symbol: &str, text: &str) -> String {
    if symbol.is_empty() {
        text.to_string()
    } else {
        format!("{symbol} {text}")
    }
}

fn flag_is_set(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty()
        || value == "0"
        || value.eq_ignore_ascii_case("false")
        || value.eq_ignore_ascii_case("no"))
}
