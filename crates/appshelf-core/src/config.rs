use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let lookup_base_url = or_default("APPSHELF_LOOKUP_BASE_URL", "https://itunes.apple.com/lookup");
    let request_timeout_secs = parse_u64("APPSHELF_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("APPSHELF_USER_AGENT", "appshelf/0.1 (app-metadata)");
    let cache_capacity = parse_u64("APPSHELF_CACHE_CAPACITY", "256")?;
    let log_level = or_default("APPSHELF_LOG_LEVEL", "info");

    Ok(AppConfig {
        lookup_base_url,
        request_timeout_secs,
        user_agent,
        cache_capacity,
        log_level,
    })
}
