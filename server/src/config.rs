use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_max_db_connections")]
    pub max_db_connections: u32,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReportingConfig {
    /// Entries per dashboard leaderboard.
    #[serde(default = "default_ten")]
    pub dashboard_size: usize,
    /// Entries per kind in combined search.
    #[serde(default = "default_ten")]
    pub search_cap: usize,
    #[serde(default = "default_ten")]
    pub default_top_limit: i64,
    /// Upper bound on listing sizes and ranking limits.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            dashboard_size: default_ten(),
            search_cap: default_ten(),
            default_top_limit: default_ten(),
            max_page_size: default_max_page_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server_config: ServerConfig,
    #[serde(default)]
    pub reporting_config: ReportingConfig,
    pub db_path: String,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_owned()
}

fn default_workers() -> usize {
    4
}

fn default_max_db_connections() -> u32 {
    16
}

fn default_true() -> bool {
    true
}

fn default_ten<T: From<u8>>() -> T {
    T::from(10)
}

fn default_max_page_size() -> usize {
    1000
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.db_path.trim().is_empty() {
        return Err("db_path must not be empty".to_owned());
    }
    if cfg.server_config.workers == 0 {
        return Err("server_config.workers must be positive".to_owned());
    }
    if cfg.server_config.max_db_connections == 0 {
        return Err("server_config.max_db_connections must be positive".to_owned());
    }
    let r = &cfg.reporting_config;
    if r.dashboard_size == 0 || r.search_cap == 0 || r.max_page_size == 0 {
        return Err("reporting_config sizes must be positive".to_owned());
    }
    if r.default_top_limit <= 0 {
        return Err("reporting_config.default_top_limit must be positive".to_owned());
    }
    Ok(())
}
