//! Server configuration loaded from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DOCKET_HOST` | `0.0.0.0` | Listen address |
//! | `DOCKET_PORT` | `8080` | Listen port |
//! | `DATABASE_URL` | unset | `PostgreSQL` URL; unset selects the in-memory store |
//! | `DOCKET_DB_POOL_SIZE` | `8` | Maximum pooled database connections |
//! | `DOCKET_STATIC_DIR` | unset | Directory served for non-API paths |

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Listen address variable.
pub const HOST_VAR: &str = "DOCKET_HOST";
/// Listen port variable.
pub const PORT_VAR: &str = "DOCKET_PORT";
/// Database URL variable.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Pool size variable.
pub const POOL_SIZE_VAR: &str = "DOCKET_DB_POOL_SIZE";
/// Static file directory variable.
pub const STATIC_DIR_VAR: &str = "DOCKET_STATIC_DIR";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value that cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// `PostgreSQL` connection URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_size: u32,
    /// Directory served for non-API paths.
    pub static_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            static_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric variable does not
    /// parse or the pool size is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        let _dotenv = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric variable does not
    /// parse or the pool size is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_or(read(PORT_VAR), PORT_VAR, DEFAULT_PORT)?;
        let pool_size = parse_or(read(POOL_SIZE_VAR), POOL_SIZE_VAR, DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: POOL_SIZE_VAR.to_owned(),
                message: "must be at least 1".to_owned(),
            });
        }

        Ok(Self {
            host,
            port,
            database_url: read(DATABASE_URL_VAR),
            pool_size,
            static_dir: read(STATIC_DIR_VAR).map(PathBuf::from),
        })
    }

    /// Returns the `host:port` listen address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|err| ConfigError::InvalidValue {
                key: key.to_owned(),
                message: format!("'{value}': {err}"),
            })
    })
}
