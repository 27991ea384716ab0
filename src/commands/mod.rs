pub mod config;
pub mod render;

pub use config::{handle_config_path, handle_config_show};
pub use render::handle_render;
