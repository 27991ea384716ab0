//! Configuration.
//!
//! Settings come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. The TOML config file (see [`path::get_config_path`]); a missing file is fine
//! 3. `PROMPTLINE_*` environment variables, `__` separating nested keys
//!    (`PROMPTLINE_SYMBOLS__PROMPT=">"`, `PROMPTLINE_SEGMENTS=cwd,git`)
//!
//! ```toml
//! segments = ["cwd", "git"]
//! index_enabled = false
//! date_time_enabled = true
//! date_time_format = "%H:%M"
//!
//! [colors]
//! cwd = { fg = "white", bg = "slate" }
//!
//! [palette]
//! slate = "#3a3a3a"
//! ```

pub mod path;

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::styling::Symbols;
use crate::styling::palette::{InvalidColorSpec, Palette};

pub use path::{CONFIG_PATH_ENV_VAR, get_config_path, set_config_path};

const ENV_PREFIX: &str = "PROMPTLINE";

/// Prompt segments, in the order they can be configured.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SegmentKind {
    Admin,
    Cwd,
    Package,
    Git,
    Hg,
}

/// A foreground/background pair of color names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fg: String,
    pub bg: String,
}

impl ColorPair {
    fn new(fg: &str, bg: &str) -> Self {
        Self {
            fg: fg.to_string(),
            bg: bg.to_string(),
        }
    }
}

/// Colors for each segment and state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentColors {
    pub admin: ColorPair,
    pub cwd: ColorPair,
    pub package: ColorPair,
    pub git_clean: ColorPair,
    pub git_dirty: ColorPair,
    pub git_critical: ColorPair,
    pub hg_clean: ColorPair,
    pub hg_unknown: ColorPair,
}

impl Default for SegmentColors {
    fn default() -> Self {
        Self {
            admin: ColorPair::new("white", "red"),
            cwd: ColorPair::new("white", "blue"),
            package: ColorPair::new("white", "black"),
            git_clean: ColorPair::new("black", "green"),
            git_dirty: ColorPair::new("black", "yellow"),
            git_critical: ColorPair::new("white", "red"),
            hg_clean: ColorPair::new("black", "green"),
            hg_unknown: ColorPair::new("white", "red"),
        }
    }
}

/// Resolved prompt configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Segments to render, left to right.
    pub segments: Vec<SegmentKind>,

    /// Run `git diff-index` to color the git segment by index state.
    pub index_enabled: bool,

    /// Right-align the current time on the bar line.
    pub date_time_enabled: bool,

    /// strftime pattern for the time.
    pub date_time_format: String,

    /// Environment variable that marks an elevated shell.
    pub admin_env_var: String,

    pub symbols: Symbols,

    pub colors: SegmentColors,

    /// Extra color names: `#rrggbb`, an ANSI-256 index, or an existing name.
    pub palette: IndexMap<String, String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            segments: vec![
                SegmentKind::Admin,
                SegmentKind::Cwd,
                SegmentKind::Package,
                SegmentKind::Git,
                SegmentKind::Hg,
            ],
            index_enabled: true,
            date_time_enabled: false,
            date_time_format: "%H:%M:%S".to_string(),
            admin_env_var: "PROMPTLINE_IS_ADMIN".to_string(),
            symbols: Symbols::default(),
            colors: SegmentColors::default(),
            palette: IndexMap::new(),
        }
    }
}

impl PromptConfig {
    /// Load from the resolved config path and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = get_config_path();
        Self::load_from(path.as_deref(), None)
    }

    /// Load from `path` (if it exists) and environment overrides.
    ///
    /// `env` replaces the process environment when given.
    pub fn load_from(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            log::debug!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("segments")
                .source(env),
        );

        builder.build()?.try_deserialize()
    }

    /// Built-in colors plus the `[palette]` table.
    pub fn palette(&self) -> Result<Palette, InvalidColorSpec> {
        Palette::with_entries(&self.palette)
    }

    /// The resolved configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
