use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://jharkhand_tourism.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub port: u16,
    pub max_connections: u32,
    pub seed_demo_hotels: bool,
}

impl Config {
    /// Reads the process environment. Call `dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| {
                log::info!("DATABASE_URL not set, using default: {DEFAULT_DATABASE_URL}");
                DEFAULT_DATABASE_URL.to_string()
            }),
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            max_connections,
            seed_demo_hotels: parse_or(&lookup, "SEED_DEMO_HOTELS", true)?,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.bind_address.clone(), self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            log::warn!("Invalid {key} value: {raw}");
            ConfigError::Invalid { key, value: raw }
        }),
    }
}
