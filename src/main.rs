use std::io::Write;

use anstyle::Style;
use clap::Parser;
use promptline::styling::{ERROR, ERROR_EMOJI, InvalidColorSpec, UnknownColor, eprintln};

mod cli;
mod commands;

use cli::{Cli, Command, ConfigCommand};

fn main() {
    let Cli {
        config,
        verbose,
        color,
        command,
        render,
    } = Cli::parse();

    anstream::ColorChoice::from(color).write_global();
    init_logging(verbose);

    if let Some(path) = config {
        promptline::config::set_config_path(path);
    }

    let result = match command {
        None => commands::handle_render(render),
        Some(Command::Render(args)) => commands::handle_render(args),
        Some(Command::Config { command }) => match command {
            ConfigCommand::Show => commands::handle_config_show(),
            ConfigCommand::Path => commands::handle_config_path(),
        },
    };

    if let Err(err) = result {
        // Color errors already carry their own emoji and hint
        if err.is::<UnknownColor>() || err.is::<InvalidColorSpec>() {
            eprintln!("{err}");
        } else {
            eprintln!("{ERROR_EMOJI} {ERROR}{err:#}{ERROR:#}");
        }
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; `-v` turns on debug output for this crate.
fn init_logging(verbose: bool) {
    let default = if verbose { "promptline=debug" } else { "warn" };
    let dim = Style::new().dimmed();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format(move |buf, record| {
            let msg = record.args().to_string();
            if msg.starts_with("$ ") || msg.starts_with("[promptline-trace]") {
                writeln!(buf, "{dim}{msg}{dim:#}")
            } else {
                writeln!(buf, "{}", msg)
            }
        })
        .init();
}
