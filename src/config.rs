//! Process configuration from environment variables (a `.env` file is loaded first by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/two_tables";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Upper bound on JSON request bodies.
    pub body_limit_bytes: usize,
    /// Create the target database on startup when it does not exist.
    pub ensure_database: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("POSTGRES_URL"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            lookup("DB_MAX_CONNECTIONS"),
            &DEFAULT_MAX_CONNECTIONS.to_string(),
        )?;
        let body_limit_bytes = parse_or(
            "BODY_LIMIT_BYTES",
            lookup("BODY_LIMIT_BYTES"),
            &DEFAULT_BODY_LIMIT_BYTES.to_string(),
        )?;
        let ensure_database = match lookup("ENSURE_DATABASE").as_deref().map(str::trim) {
            None | Some("") | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "ENSURE_DATABASE",
                    value: other.to_string(),
                })
            }
        };

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
            ensure_database,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: &str) -> Result<T, ConfigError> {
    let raw = raw.filter(|s| !s.trim().is_empty());
    let value = raw.as_deref().map(str::trim).unwrap_or(default);
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
