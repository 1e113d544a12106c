//! Server configuration.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 4000;

/// Backing file used when `GAMERS_DB` is not set.
pub const DEFAULT_DB_PATH: &str = "db.json";

/// Error raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "invalid PORT value: {:?}", value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Backing file of the record store.
    pub db_path: PathBuf,
    /// Enable permissive CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Reads `PORT` and `GAMERS_DB` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `PORT` and `GAMERS_DB` through `lookup`, falling back to the
    /// defaults for unset or empty variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(port) = lookup("PORT").filter(|v| !v.trim().is_empty()) {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(port);
        }

        if let Some(path) = lookup("GAMERS_DB").filter(|v| !v.is_empty()) {
            builder = builder.db_path(path);
        }

        Ok(builder.build())
    }

    /// Base URL advertised in the API description.
    pub fn public_url(&self) -> String {
        format!("http://localhost:{}", self.addr.port())
    }
}

/// Builder for ServerConfig.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    db_path: Option<PathBuf>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets the listen port on all interfaces.
    pub fn port(mut self, port: u16) -> Self {
        self.addr = Some(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
        self
    }

    /// Sets the backing file path.
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    /// Sets whether CORS is enabled.
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Builds the server config.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            addr: self.addr.unwrap_or(defaults.addr),
            db_path: self.db_path.unwrap_or(defaults.db_path),
            cors: self.cors.unwrap_or(defaults.cors),
        }
    }
}
