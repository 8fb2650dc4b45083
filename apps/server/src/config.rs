use std::{net::SocketAddr, str::FromStr, time::Duration};

use stockpivot_market_data::DEFAULT_MARKET_SUFFIX;
use thiserror::Error;

use crate::auth::ApiKeyStore;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:50100";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if s.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else {
            Err(format!("expected 'text' or 'json', got '{}'", s))
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub api_keys: ApiKeyStore,
    pub market_suffix: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from the process environment, after `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the raw value of
    /// a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr = var("STOCKPIVOT_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "STOCKPIVOT_LISTEN_ADDR",
                reason: e.to_string(),
            })?;

        let api_keys = var("STOCKPIVOT_API_KEYS")
            .ok_or(ConfigError::Missing("STOCKPIVOT_API_KEYS"))?
            .parse::<ApiKeyStore>()
            .map_err(|reason| ConfigError::Invalid {
                var: "STOCKPIVOT_API_KEYS",
                reason,
            })?;

        let market_suffix = var("STOCKPIVOT_MARKET_SUFFIX")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MARKET_SUFFIX.to_string());

        let cors_allow = var("STOCKPIVOT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms = match var("STOCKPIVOT_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid {
                    var: "STOCKPIVOT_REQUEST_TIMEOUT_MS",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        let log_format = match var("STOCKPIVOT_LOG_FORMAT") {
            Some(raw) => raw
                .trim()
                .parse::<LogFormat>()
                .map_err(|reason| ConfigError::Invalid {
                    var: "STOCKPIVOT_LOG_FORMAT",
                    reason,
                })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            listen_addr,
            api_keys,
            market_suffix,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}
