//! server — process bootstrap and request plumbing.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gamers_api::server::{self, ServerConfig};
//!
//! server::init_logging("info");
//! let config = ServerConfig::from_env()?;
//! server::serve(config).await?;
//! ```

mod config;
mod http;
mod logging;

use std::fmt;

use crate::store::StoreError;

pub use config::{ConfigError, ServerConfig, ServerConfigBuilder, DEFAULT_DB_PATH, DEFAULT_PORT};
pub use http::{app, serve, GAMERS_PATH};
pub use logging::init_logging;

/// Error raised while starting or running the server.
#[derive(Debug)]
pub enum ServerError {
    /// The record store could not be opened.
    Store(StoreError),
    /// Binding or serving the listener failed.
    Io(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Store(e) => write!(f, "failed to open record store: {}", e),
            ServerError::Io(e) => write!(f, "server io error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Store(e) => Some(e),
            ServerError::Io(e) => Some(e),
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        ServerError::Store(err)
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Io(err)
    }
}
