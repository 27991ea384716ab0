use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

const SHELL_SETUP: &str = color_print::cstr!(
    r#"<bold><underline>Shell setup:</></>

  <bold>bash</>  PROMPT_COMMAND='PS1="$(promptline)"'
  <bold>zsh</>   precmd() { PROMPT="$(promptline)" }

Configuration lives in <bold>config.toml</> (see <bold>promptline config path</>)."#
);

#[derive(Parser, Debug)]
#[command(
    name = "promptline",
    version,
    about = "Powerline-style shell prompt decorator",
    long_about = None,
    after_long_help = SHELL_SETUP
)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to emit color escapes. Prompt hooks capture stdout, so the
    /// default is to always color.
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the default `render` command.
    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the decorated prompt (the default).
    Render(RenderArgs),
    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the config file location.
    Path,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// The prompt the shell would have shown, used for the working path and
    /// environment name.
    #[arg(long, value_name = "PROMPT", allow_hyphen_values = true)]
    pub previous_prompt: Option<String>,

    /// Terminal width for right-aligned text (detected when omitted).
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Directory to describe instead of the current one.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Omit the date/time even when enabled in config.
    #[arg(long)]
    pub no_date_time: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for anstream::ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self::Auto,
            ColorMode::Always => Self::Always,
            ColorMode::Never => Self::Never,
        }
    }
}
