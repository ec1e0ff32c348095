//! Server configuration loaded from process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::util::env::EnvConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
}

/// Process-level configuration: bind port plus the environment snapshot
/// that gets injected into every rendered page.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub env: EnvConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok())?,
            env: EnvConfig::from_env(),
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(3000),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value)),
    }
}
