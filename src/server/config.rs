use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// - `DATABASE_URL` - required, PostgreSQL or SQLite connection string
    /// - `BIND_ADDRESS` - optional, defaults to `0.0.0.0:3000`
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
