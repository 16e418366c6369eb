//! Process configuration read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `HIREBOARD_BIND` | `0.0.0.0:8080` |
//! | `DATABASE_URL` | unset: in-memory repositories |
//! | `HIREBOARD_DB_MAX_CONNECTIONS` | `5` |

use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HIREBOARD_BIND must be a socket address, got {value:?}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("HIREBOARD_DB_MAX_CONNECTIONS must be a positive integer, got {value:?}")]
    InvalidMaxConnections { value: String },
}

impl ApiConfig {
    /// Load `.env` when present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_bind = lookup("HIREBOARD_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = raw_bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBind {
                value: raw_bind.clone(),
                source,
            })?;

        let database = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                let max_connections = match lookup("HIREBOARD_DB_MAX_CONNECTIONS") {
                    None => DEFAULT_MAX_CONNECTIONS,
                    Some(value) => match value.trim().parse::<u32>() {
                        Ok(n) if n > 0 => n,
                        _ => return Err(ConfigError::InvalidMaxConnections { value }),
                    },
                };
                Some(DatabaseConfig {
                    url,
                    max_connections,
                })
            }
            None => None,
        };

        Ok(Self { bind, database })
    }
}
