//! Working directory segment.

use std::path::Path;

use super::{RenderContext, SegmentProvider, colored};
use crate::prompt_env;
use crate::styling::Segment;

/// The working directory, home shown as `~`.
///
/// Prefers the path the host shell already rendered in its own prompt, which
/// keeps shell-specific spellings (drive letters, symlinked paths); falls back
/// to the process working directory.
pub struct CwdSegment;

impl SegmentProvider for CwdSegment {
    fn resolve(&self, ctx: &RenderContext<'_>) -> Option<Segment> {
        let path = ctx
            .previous_prompt
            .as_deref()
            .and_then(prompt_env::working_path)
            .unwrap_or_else(|| ctx.cwd().display().to_string());

        let text = tilde_path(&path, ctx.home.as_deref());
        Some(colored(&ctx.config.colors.cwd, text))
    }
}

/// Replace a leading home directory with `~`.
///
/// Only whole path components match: with home `/home/me`, `/home/media`
/// stays as is.
pub fn tilde_path(path: &str, home: Option<&Path>) -> String {
    let Some(home) = home.filter(|h| !h.as_os_str().is_empty()) else {
        return path.to_string();
    };

    match Path::new(path).strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => {
            let sep = std::path::MAIN_SEPARATOR;
            format!("~{sep}{}", rest.display())
        }
        Err(_) => path.to_string(),
    }
}
