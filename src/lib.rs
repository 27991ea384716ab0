pub mod config;
pub mod git;
pub mod hg;
pub mod locate;
pub mod manifest;
pub mod prompt;
pub mod prompt_env;
pub mod segments;
pub mod shell_exec;
pub mod styling;
pub mod utils;

pub use config::PromptConfig;
pub use prompt::render;
