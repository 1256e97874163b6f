use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

/// Runtime configuration loaded from the environment.
pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://soma.db?mode=rwc`.
    pub database_url: String,

    /// Address the HTTP listener binds to.
    pub bind_addr: String,

    /// Origin allowed by the CORS layer.
    pub frontend_url: String,

    /// Days of inactivity before a session expires.
    pub session_ttl_days: i64,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `BIND_ADDR`, `FRONTEND_URL` and `SESSION_TTL_DAYS`
    /// fall back to defaults when unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and parsable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `SESSION_TTL_DAYS` is not an integer
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            session_ttl_days: parse_optional("SESSION_TTL_DAYS", DEFAULT_SESSION_TTL_DAYS)?,
        })
    }
}

fn parse_optional<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
