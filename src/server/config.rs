//! Server configuration.

use std::net::SocketAddr;
use serde::{Deserialize, Serialize};

use crate::server::error::Error;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// Initial size of each connection's read buffer. It doubles whenever a
    /// request does not fit.
    pub read_buffer_size: usize,
}

impl ServerConfig {
    /// Listen on every interface at `port`.
    pub fn with_port(port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            ..Self::default()
        }
    }

    /// Load a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            read_buffer_size: 8,
        }
    }
}
