pub mod app_config;
pub mod config;
pub mod manifest;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use manifest::{AppManifest, AppRef};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but its value could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
