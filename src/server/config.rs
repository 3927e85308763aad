use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,

    pub server_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            database_max_connections: parse_env_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            server_addr: parse_env_or("SERVER_ADDR", default_server_addr())?,
        })
    }
}

fn default_server_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_SERVER_PORT))
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
