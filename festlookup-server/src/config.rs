//! Database configuration from environment variables
//!
//! Environment variables:
//!   DB_HOST       Database host (default: localhost)
//!   DB_PORT       Database port (default: 5432)
//!   DB_NAME       Database name (default: postgres)
//!   DB_USER       Database user (default: postgres)
//!   DB_PASSWORD   Database password (default: empty)

use sqlx::postgres::PgConnectOptions;

/// Default PostgreSQL port when DB_PORT is unset or unparsable.
const DEFAULT_DB_PORT: u16 = 5432;

/// Connection settings for the festival database
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_DB_PORT,
            name: "postgres".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
        }
    }
}

impl DbConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset. An unparsable DB_PORT logs a warning
    /// rather than failing startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match std::env::var("DB_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("DB_PORT '{}' is not a valid port, using {}", raw, DEFAULT_DB_PORT);
                DEFAULT_DB_PORT
            }),
            Err(_) => DEFAULT_DB_PORT,
        };

        Self {
            host: std::env::var("DB_HOST").unwrap_or(defaults.host),
            port,
            name: std::env::var("DB_NAME").unwrap_or(defaults.name),
            user: std::env::var("DB_USER").unwrap_or(defaults.user),
            password: std::env::var("DB_PASSWORD").unwrap_or(defaults.password),
        }
    }

    /// Connection options for sqlx.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password)
    }
}
