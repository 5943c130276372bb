//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `CATALOG_HTTP_PORT` | `8080` |
//! | `CATALOG_BIND_ADDR` | `0.0.0.0` |
//! | `CATALOG_STORE` | `sqlite` (`sqlite` or `memory`) |
//! | `CATALOG_DB_PATH` | `./catalog.db` (`:memory:` allowed) |
//! | `CATALOG_DB_MAX_CONNECTIONS` | `5` |

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use catalog_db::DbConfig;

/// Which store backs the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Sqlite => write!(f, "sqlite"),
            StoreKind::Memory => write!(f, "memory"),
        }
    }
}

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// HTTP listen address
    pub bind_addr: IpAddr,

    /// Backing store
    pub store: StoreKind,

    /// SQLite database file
    pub db_path: PathBuf,

    /// SQLite pool size
    pub db_max_connections: u32,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = CatalogConfig {
            http_port: var("CATALOG_HTTP_PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_HTTP_PORT".to_string()))?,

            bind_addr: var("CATALOG_BIND_ADDR", "0.0.0.0")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_BIND_ADDR".to_string()))?,

            store: var("CATALOG_STORE", "sqlite").parse()?,

            db_path: PathBuf::from(var("CATALOG_DB_PATH", "./catalog.db")),

            db_max_connections: var("CATALOG_DB_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CATALOG_DB_MAX_CONNECTIONS".to_string()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "CATALOG_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }

    /// Pool settings for the SQLite store.
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(&self.db_path);
        if config.is_in_memory() {
            return DbConfig::in_memory();
        }
        config.max_connections(self.db_max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unknown CATALOG_STORE '{0}' (expected 'sqlite' or 'memory')")]
    UnknownStore(String),
}
