//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default log filter when neither `RUST_LOG` nor `RECEIPT_API_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,receipt_api=debug,receipt_store=debug";

/// Receipt API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP server port
    pub port: u16,

    /// Max request body size in bytes (default: 1MB)
    pub max_body_bytes: usize,

    /// tracing-subscriber filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            max_body_bytes: 1024 * 1024,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        Ok(ApiConfig {
            host: parse_or(&lookup, "RECEIPT_API_HOST", defaults.host)?,
            port: parse_or(&lookup, "RECEIPT_API_PORT", defaults.port)?,
            max_body_bytes: parse_or(&lookup, "RECEIPT_API_MAX_BODY_BYTES", defaults.max_body_bytes)?,
            log_filter: lookup("RECEIPT_API_LOG").unwrap_or(defaults.log_filter),
        })
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
