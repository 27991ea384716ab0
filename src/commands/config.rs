use anyhow::{Context, Result};
use color_print::cformat;
use promptline::config::{PromptConfig, get_config_path};
use promptline::styling::{HINT_EMOJI, eprintln, print, println};

/// Handle `config show`: the merged defaults, file and environment.
pub fn handle_config_show() -> Result<()> {
    let config = PromptConfig::load().context("Failed to load config")?;
    // Reject palette mistakes here too, not only at render time
    config.palette()?;

    if let Some(path) = get_config_path()
        && !path.exists()
    {
        let message = cformat!(
            "<dim>No config file at <bold>{}</>; showing defaults</>",
            path.display()
        );
        eprintln!("{HINT_EMOJI} {message}");
    }

    let toml = config
        .to_toml()
        .context("Failed to serialize config")?;
    print!("{toml}");
    Ok(())
}

/// Handle `config path`.
pub fn handle_config_path() -> Result<()> {
    let path = get_config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}
