use std::{env, time::Duration};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            None | Some("development") => Environment::Development,
            Some("production") => Environment::Production,
            Some(other) => {
                return Err(AppError::Config(format!("Invalid APP_ENV value: {}", other)));
            }
        };

        let host = match environment {
            Environment::Development => {
                lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string())
            }
            Environment::Production => lookup("HOST")
                .ok_or_else(|| AppError::Config("HOST must be set in production".to_string()))?,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port: parse_or(&lookup, "PORT", 4000)?,
                max_body_size: parse_or(&lookup, "MAX_BODY_SIZE", 1024 * 1024)?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL")
                    .ok_or_else(|| AppError::Config("DATABASE_URL not set".to_string()))?,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
                acquire_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_ACQUIRE_TIMEOUT_SECS",
                    5,
                )?),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid {} value", key))),
        None => Ok(default),
    }
}
