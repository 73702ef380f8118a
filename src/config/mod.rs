pub mod app_config;
pub mod cli;

pub use app_config::{AppConfig, HexCase};
pub use cli::{Cli, Commands};
