//! CRUD operations on events and users, plus the enriched booking
//! listings.
//!
//! The repository enforces no cross-entity invariant beyond referential
//! existence; the seat-reservation protocol lives in
//! [`crate::service::BookingService`]. The one exception is
//! [`EntityRepository::update_event`], which recomputes `seats_available`
//! under a row lock when the capacity changes, since it is the only other
//! writer of that column.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::event::recompute_available;
use crate::domain::{
    BookingDetail, Event, EventBooking, EventId, EventPatch, NewEvent, NewUser, User, UserBooking,
    UserId,
};
use crate::error::ApiError;

/// Full `events` row as decoded from the database.
type EventRow = (
    Uuid,
    String,
    Option<String>,
    i32,
    i32,
    DateTime<Utc>,
    DateTime<Utc>,
);

fn event_from_row(row: EventRow) -> Event {
    let (id, name, description, total_seats, seats_available, created_at, updated_at) = row;
    Event {
        id: EventId::from_uuid(id),
        name,
        description,
        total_seats,
        seats_available,
        created_at,
        updated_at,
    }
}

/// PostgreSQL-backed repository for events, users, and booking listings.
#[derive(Debug, Clone)]
pub struct EntityRepository {
    pool: PgPool,
}

impl EntityRepository {
    /// Creates a new repository over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ── Events ──────────────────────────────────────────────────────────

    /// Inserts a new event with `seats_available = total_seats`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Database`] on store failure.
    pub async fn create_event(&self, new: NewEvent) -> Result<Event, ApiError> {
        let id = EventId::new();
        let row = sqlx::query_as::<_, EventRow>(
            "INSERT INTO events (id, name, description, total_seats, seats_available) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING id, name, description, total_seats, seats_available, created_at, updated_at",
        )
        .bind(id.as_uuid())
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.total_seats)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(event_id = %id, total_seats = new.total_seats, "event created");
        Ok(event_from_row(row))
    }

    /// Fetches a single event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EventNotFound`] when the id is unknown.
    pub async fn get_event(&self, id: EventId) -> Result<Event, ApiError> {
        let row = sqlx::query_as::<_, EventRow>(
            "SELECT id, name, description, total_seats, seats_available, created_at, updated_at \
             FROM events WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(event_from_row).ok_or(ApiError::EventNotFound(id))
    }

    /// Lists all events, newest-created first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Database`] on store failure.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let rows = sqlx::query_as::<_, EventRow>(
            "SELECT id, name, description, total_seats, seats_available, created_at, updated_at \
             FROM events ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(event_from_row).collect())
    }

    /// Applies a partial update to an event. Omitted fields are unchanged.
    ///
    /// When the patch carries `total_seats`, the current totals are read
    /// under `FOR UPDATE` and `seats_available` is recomputed against the
    /// already-booked floor inside the same transaction, so a concurrent
    /// capacity edit or booking cannot produce a lost update.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EventNotFound`] when the id is unknown and
    /// [`ApiError::Validation`] when the new capacity would shrink below
    /// the seats already booked.
    pub async fn update_event(&self, id: EventId, patch: EventPatch) -> Result<Event, ApiError> {
        patch.validate()?;

        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, (String, Option<String>, i32, i32)>(
            "SELECT name, description, total_seats, seats_available \
             FROM events WHERE id = $1 FOR UPDATE",
        )
        .bind(id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        // Dropping `tx` on the error paths below rolls the transaction back.
        let Some((name, description, total_old, available_old)) = current else {
            return Err(ApiError::EventNotFound(id));
        };

        let name = patch.name.unwrap_or(name);
        let description = patch.description.or(description);
        let (total_seats, seats_available) = match patch.total_seats {
            Some(total_new) => (
                total_new,
                recompute_available(total_old, available_old, total_new)?,
            ),
            None => (total_old, available_old),
        };

        let row = sqlx::query_as::<_, EventRow>(
            "UPDATE events \
             SET name = $2, description = $3, total_seats = $4, seats_available = $5, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING id, name, description, total_seats, seats_available, created_at, updated_at",
        )
        .bind(id.as_uuid())
        .bind(&name)
        .bind(&description)
        .bind(total_seats)
        .bind(seats_available)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(event_id = %id, "event updated");
        Ok(event_from_row(row))
    }

    /// Deletes an event; its bookings cascade away with it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EventNotFound`] when the id is unknown.
    pub async fn delete_event(&self, id: EventId) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::EventNotFound(id));
        }

        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }

    // ── Users ───────────────────────────────────────────────────────────

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DuplicateEmail`] when the email is already
    /// registered.
    pub async fn create_user(&self, new: NewUser) -> Result<User, ApiError> {
        let id = UserId::new();
        let row = sqlx::query_as::<_, (Uuid, String, String, DateTime<Utc>)>(
            "INSERT INTO users (id, name, email) VALUES ($1, $2, $3) \
             RETURNING id, name, email, created_at",
        )
        .bind(id.as_uuid())
        .bind(&new.name)
        .bind(&new.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::DuplicateEmail(new.email.clone())
            }
            _ => ApiError::from(e),
        })?;

        tracing::info!(user_id = %id, "user registered");
        let (id, name, email, created_at) = row;
        Ok(User {
            id: UserId::from_uuid(id),
            name,
            email,
            created_at,
        })
    }

    /// Fetches a single user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UserNotFound`] when the id is unknown.
    pub async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        let row = sqlx::query_as::<_, (Uuid, String, String, DateTime<Utc>)>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some((id_raw, name, email, created_at)) = row else {
            return Err(ApiError::UserNotFound(id));
        };
        Ok(User {
            id: UserId::from_uuid(id_raw),
            name,
            email,
            created_at,
        })
    }

    /// Checks whether a user exists without fetching the full row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Database`] on store failure.
    pub async fn user_exists(&self, id: UserId) -> Result<bool, ApiError> {
        let found = sqlx::query_scalar::<_, i32>("SELECT 1 FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    // ── Booking listings ────────────────────────────────────────────────

    /// Lists an event's bookings with booker name and email, newest first.
    ///
    /// An unknown event id yields an empty list rather than an error;
    /// callers needing a 404 check must query the event first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Database`] on store failure.
    pub async fn list_bookings_for_event(
        &self,
        id: EventId,
    ) -> Result<Vec<EventBooking>, ApiError> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, String, String, i32, DateTime<Utc>)>(
            "SELECT b.id, b.user_id, u.name, u.email, b.seats_reserved, b.created_at \
             FROM bookings AS b \
             INNER JOIN users AS u ON b.user_id = u.id \
             WHERE b.event_id = $1 \
             ORDER BY b.created_at DESC",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, user_id, user_name, user_email, seats_reserved, created_at)| EventBooking {
                    id: id.into(),
                    user_id: user_id.into(),
                    user_name,
                    user_email,
                    seats_reserved,
                    created_at,
                },
            )
            .collect())
    }

    /// Lists a user's bookings with the event name, newest first.
    ///
    /// An unknown user id yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Database`] on store failure.
    pub async fn list_bookings_for_user(&self, id: UserId) -> Result<Vec<UserBooking>, ApiError> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, String, i32, DateTime<Utc>)>(
            "SELECT b.id, b.event_id, e.name, b.seats_reserved, b.created_at \
             FROM bookings AS b \
             INNER JOIN events AS e ON b.event_id = e.id \
             WHERE b.user_id = $1 \
             ORDER BY b.created_at DESC",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, event_id, event_name, seats_reserved, created_at)| UserBooking {
                    id: id.into(),
                    event_id: event_id.into(),
                    event_name,
                    seats_reserved,
                    created_at,
                },
            )
            .collect())
    }

    /// Lists every booking with both counterpart names, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Database`] on store failure.
    pub async fn list_bookings(&self) -> Result<Vec<BookingDetail>, ApiError> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, String, Uuid, String, String, i32, DateTime<Utc>)>(
            "SELECT b.id, b.event_id, e.name, b.user_id, u.name, u.email, \
                    b.seats_reserved, b.created_at \
             FROM bookings AS b \
             INNER JOIN events AS e ON b.event_id = e.id \
             INNER JOIN users AS u ON b.user_id = u.id \
             ORDER BY b.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, event_id, event_name, user_id, user_name, user_email, seats, created_at)| {
                    BookingDetail {
                        id: id.into(),
                        event_id: event_id.into(),
                        event_name,
                        user_id: user_id.into(),
                        user_name,
                        user_email,
                        seats_reserved: seats,
                        created_at,
                    }
                },
            )
            .collect())
    }
}
