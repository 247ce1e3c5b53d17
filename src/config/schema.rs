//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, IpAddr, SocketAddr};

/// Loopback address the server binds to when none is configured.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Port the server binds to when none is configured.
pub const DEFAULT_PORT: u16 = 25565;

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening socket settings.
    pub listener: ListenerConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListenerConfig {
    /// IP address to bind (e.g., "127.0.0.1" or "::1").
    pub address: String,

    /// TCP port; 0 asks the OS for an ephemeral port.
    pub port: u16,

    /// Bytes read from each connection. Longer requests are truncated.
    pub read_buffer_bytes: usize,

    /// Pending connection queue length passed to `listen`.
    pub backlog: u32,
}

impl ListenerConfig {
    /// The address and port as a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.address.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            read_buffer_bytes: 1024,
            backlog: 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "http_dispatch=info".to_string(),
        }
    }
}
