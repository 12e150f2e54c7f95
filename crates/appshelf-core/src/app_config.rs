/// Runtime configuration for appshelf, sourced from environment
/// variables. Every field has a default; nothing is required.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub lookup_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Maximum number of resolved listings kept in the in-process
    /// response cache. A tunable, not a correctness property.
    pub cache_capacity: u64,
    pub log_level: String,
}
