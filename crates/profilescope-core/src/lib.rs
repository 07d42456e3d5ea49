//! Shared configuration for the profilescope workspace.

mod app_config;
mod config;
mod error;

pub use app_config::{AppConfig, Environment, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
