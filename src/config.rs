//! Server configuration, read from the command line or environment.

use crate::error::{Result, VectorDbError};
use clap::Args;
use std::net::SocketAddr;

/// Default bind address for the HTTP server.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration for the `hermes` binary.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HERMES_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Log level or filter directive (overridden by RUST_LOG)
    #[arg(long, env = "HERMES_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Check the configuration and resolve the bind address.
    pub fn validate(&self) -> Result<SocketAddr> {
        if self.log_level.trim().is_empty() {
            return Err(VectorDbError::Config("log level cannot be empty".to_string()));
        }
        self.addr
            .parse()
            .map_err(|e| VectorDbError::Config(format!("invalid address '{}': {}", self.addr, e)))
    }
}
