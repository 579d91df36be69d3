use std::time::Duration;

use anyhow::{Context, Result};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on decision-graph vertices for a single `/solve`.
    pub max_graph_nodes: usize,
    pub generate_min_items: usize,
    pub generate_max_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_graph_nodes: 2000,
            generate_min_items: 3,
            generate_max_items: 6,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_graph_nodes: parse_env("MAX_GRAPH_NODES", defaults.max_graph_nodes)?,
            generate_min_items: parse_env("GENERATE_MIN_ITEMS", defaults.generate_min_items)?,
            generate_max_items: parse_env("GENERATE_MAX_ITEMS", defaults.generate_max_items)?,
        };

        if config.generate_min_items == 0 || config.generate_min_items > config.generate_max_items {
            anyhow::bail!(
                "GENERATE_MIN_ITEMS ({}) must be between 1 and GENERATE_MAX_ITEMS ({})",
                config.generate_min_items,
                config.generate_max_items
            );
        }

        Ok(config)
    }
}

/// Settings for the page model and its HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// How long a transient alert stays visible.
    pub alert_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:8080".to_string(),
            alert_timeout: Duration::from_millis(6000),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = ClientConfig::default();
        Ok(ClientConfig {
            base_url: std::env::var("KNAPSACK_URL").unwrap_or(defaults.base_url),
            alert_timeout: Duration::from_millis(parse_env(
                "ALERT_TIMEOUT_MS",
                defaults.alert_timeout.as_millis() as u64,
            )?),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
