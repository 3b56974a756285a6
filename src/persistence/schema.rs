//! Connection pool bootstrap and idempotent schema creation.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::AppConfig;

/// The three tables of the booking model.
///
/// `seats_available` is maintained incrementally by the writers; the CHECK
/// constraints are a backstop, not the enforcement mechanism. Bookings
/// cascade away with their event or user.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id              UUID PRIMARY KEY,
    name            TEXT NOT NULL,
    description     TEXT,
    total_seats     INTEGER NOT NULL CHECK (total_seats > 0),
    seats_available INTEGER NOT NULL CHECK (seats_available >= 0),
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS users (
    id         UUID PRIMARY KEY,
    name       TEXT NOT NULL,
    email      TEXT NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS bookings (
    id             UUID PRIMARY KEY,
    user_id        UUID NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    event_id       UUID NOT NULL REFERENCES events (id) ON DELETE CASCADE,
    seats_reserved INTEGER NOT NULL CHECK (seats_reserved > 0),
    created_at     TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS bookings_event_id_idx ON bookings (event_id);
CREATE INDEX IF NOT EXISTS bookings_user_id_idx ON bookings (user_id);
"#;

/// Opens a bounded connection pool against the configured database.
///
/// Every connection carries server-side `statement_timeout` and
/// `lock_timeout` settings so a transaction stuck behind a long-held row
/// lock fails with SQLSTATE 57014 instead of blocking its caller forever.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] when the URL cannot be parsed or the pool
/// cannot reach the database.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let options: PgConnectOptions = config.database_url.parse::<PgConnectOptions>()?.options([
        (
            "statement_timeout",
            format!("{}ms", config.database_statement_timeout_ms),
        ),
        (
            "lock_timeout",
            format!("{}ms", config.database_lock_timeout_ms),
        ),
    ]);

    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Creates the schema if it does not exist yet. Safe to run on every
/// process start.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] on database failure.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::debug!("schema ensured");
    Ok(())
}
