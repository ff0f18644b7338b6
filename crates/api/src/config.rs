//! Runtime configuration (environment driven).

use std::net::SocketAddr;

use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "TOOLSHOP_BIND_ADDR";
pub const ENV_TITLE: &str = "TOOLSHOP_TITLE";
pub const ENV_DESCRIPTION: &str = "TOOLSHOP_DESCRIPTION";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TITLE: &str = "Toolshop API";
pub const DEFAULT_DESCRIPTION: &str = "Example item catalog API with tests";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address {value:?} in {var}: {reason}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// API process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub title: String,
    pub description: String,
    pub version: String,
}

impl ApiConfig {
    /// Load from process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                var: ENV_BIND_ADDR,
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            bind_addr,
            title: lookup(ENV_TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: lookup(ENV_DESCRIPTION)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
