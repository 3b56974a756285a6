//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), each with a default suitable for
//! local development against a stock PostgreSQL.

use std::net::SocketAddr;

/// Top-level service configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_acquire_timeout_secs: u64,

    /// Server-side statement timeout in milliseconds. A transaction stuck
    /// behind a long-held row lock fails instead of blocking forever.
    pub database_statement_timeout_ms: u64,

    /// Server-side lock wait ceiling in milliseconds.
    pub database_lock_timeout_ms: u64,

    /// Whole-request timeout in seconds applied by the HTTP layer.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to local-development defaults when a variable is not
    /// set. `DATABASE_URL`, if present, overrides the individual
    /// `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME`
    /// variables. Calls `dotenvy::dotenv().ok()` to optionally load a
    /// `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let host = env_or("DB_HOST", "localhost");
            let port = env_or("DB_PORT", "5432");
            let user = env_or("DB_USER", "postgres");
            let password = env_or("DB_PASSWORD", "postgres");
            let name = env_or("DB_NAME", "event_booking");
            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        });

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 10);
        let database_min_connections = parse_env("DATABASE_MIN_CONNECTIONS", 2);
        let database_acquire_timeout_secs = parse_env("DATABASE_ACQUIRE_TIMEOUT_SECS", 5);
        let database_statement_timeout_ms = parse_env("DATABASE_STATEMENT_TIMEOUT_MS", 5_000);
        let database_lock_timeout_ms = parse_env("DATABASE_LOCK_TIMEOUT_MS", 3_000);
        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30);

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_min_connections,
            database_acquire_timeout_secs,
            database_statement_timeout_ms,
            database_lock_timeout_ms,
            request_timeout_secs,
        })
    }
}

/// Returns the variable's value, or `default` when unset.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing() {
        let value: u32 = parse_env("SEATLOCK_TEST_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn env_or_falls_back_on_missing() {
        let value = env_or("SEATLOCK_TEST_UNSET_VARIABLE", "fallback");
        assert_eq!(value, "fallback");
    }
}
