//! `promptline render`: print the decorated prompt.

use std::path::PathBuf;

use anyhow::{Context, Result};
use promptline::config::PromptConfig;
use promptline::prompt;
use promptline::segments::RenderContext;
use promptline::styling::{print, terminal_width};
use promptline::utils::get_now;

use crate::cli::RenderArgs;

pub fn handle_render(args: RenderArgs) -> Result<()> {
    let mut config = PromptConfig::load().context("Failed to load config")?;
    if args.no_date_time {
        config.date_time_enabled = false;
    }

    let cwd = match args.cwd {
        Some(dir) => std::path::absolute(&dir)
            .with_context(|| format!("Failed to resolve {}", dir.display()))?,
        None => current_dir()?,
    };
    let ctx = RenderContext::from_env(&config, cwd, args.previous_prompt);
    let width = args.width.or_else(terminal_width);

    let output = prompt::render(&ctx, width, Some(&get_now()))?;
    print!("{output}");
    Ok(())
}

/// The process working directory, falling back to `$PWD` when it was deleted
/// out from under the shell.
fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().or_else(|err| {
        std::env::var_os("PWD")
            .filter(|pwd| !pwd.is_empty())
            .map(PathBuf::from)
            .ok_or(err)
            .context("Failed to determine the current directory")
    })
}
