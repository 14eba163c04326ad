//! Server configuration.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::server::error::Error;
use crate::server::resolver::PathPolicy;

/// Static file server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The address to bind to.
    pub host: IpAddr,
    /// The port to bind to.
    pub port: u16,
    /// The directory files are served from.
    pub root: PathBuf,
    /// Size of each read from a connection.
    pub read_buffer_size: usize,
    /// Length of the pending connection queue.
    pub backlog: u32,
    /// Largest accepted request head, in bytes. `None` disables the limit.
    pub max_head_size: Option<usize>,
    /// How request paths may relate to `root`.
    pub path_policy: PathPolicy,
}

impl ServerConfig {
    /// Configuration for serving `root` on `port`, with every other field at
    /// its default.
    pub fn new(port: u16, root: impl Into<PathBuf>) -> Self {
        Self {
            port,
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = fs::read(path)?;
        Ok(serde_json::from_slice(&raw)?)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            root: PathBuf::from("."),
            read_buffer_size: 1024,
            backlog: 100,
            max_head_size: Some(64 * 1024),
            path_policy: PathPolicy::Compatible,
        }
    }
}
