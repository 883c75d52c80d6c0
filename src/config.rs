use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Maximum connections held by the pool.
    pub pool_size: u32,
    /// Order ids per line query when paged orders load their lines.
    pub batch_fetch_size: usize,
    /// Insert the sample orders at startup when the store is empty.
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse(&lookup, "PORT", 8080, "a valid port number")?;

        let pool_size: u32 = parse(&lookup, "DB_POOL_SIZE", 10, "a positive integer")?;
        if pool_size == 0 {
            return Err(invalid("DB_POOL_SIZE", "a positive integer", "0"));
        }

        let batch_fetch_size: usize = parse(&lookup, "BATCH_FETCH_SIZE", 100, "a positive integer")?;
        if batch_fetch_size == 0 {
            return Err(invalid("BATCH_FETCH_SIZE", "a positive integer", "0"));
        }

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA").as_deref() {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => return Err(invalid("SEED_SAMPLE_DATA", "true or false", other)),
        };

        Ok(Self {
            database_url,
            host,
            port,
            pool_size,
            batch_fetch_size,
            seed_sample_data,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| invalid(name, expected, &raw)),
    }
}

fn invalid(name: &'static str, expected: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        expected,
        value: value.to_string(),
    }
}
