//! One full prompt render: providers, then the compositor.

use anyhow::Result;
use chrono::{DateTime, TimeZone};

use crate::prompt_env::environment_name;
use crate::segments::{RenderContext, resolve_all};
use crate::styling::compose::{Layout, compose};
use crate::utils::format_time;

/// Render the prompt for `ctx`.
///
/// `now` is shown right-aligned when the clock is enabled and `width` is known.
/// Fails only on configuration errors (bad palette entry, unknown color name).
pub fn render<Tz: TimeZone>(
    ctx: &RenderContext<'_>,
    width: Option<usize>,
    now: Option<&DateTime<Tz>>,
) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let config = ctx.config;
    let palette = config.palette()?;
    let segments = resolve_all(ctx);

    let clock = now
        .filter(|_| config.date_time_enabled)
        .and_then(|now| format_time(now, &config.date_time_format));
    let env_name = ctx.previous_prompt.as_deref().and_then(environment_name);

    let layout = Layout {
        right: clock.as_deref(),
        width,
        env_name: env_name.as_deref(),
    };
    Ok(compose(&segments, &palette, &config.symbols, layout)?)
}
