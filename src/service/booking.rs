//! The seat-reservation protocol.
//!
//! [`BookingService`] is the sole writer of `seats_available` on the
//! booking path. Concurrent reservations against the same event are
//! serialized on the event's row lock: once one transaction holds the
//! `FOR UPDATE` lock, every competitor blocks until it commits or rolls
//! back, so no capacity check ever runs against a stale count.

use crate::domain::{BookingId, NewBooking};
use crate::error::ApiError;
use crate::persistence::EntityRepository;

/// Transactional engine for creating bookings.
#[derive(Debug, Clone)]
pub struct BookingService {
    repository: EntityRepository,
}

impl BookingService {
    /// Creates a new booking service over the shared repository.
    #[must_use]
    pub fn new(repository: EntityRepository) -> Self {
        Self { repository }
    }

    /// Reserves seats on an event, atomically.
    ///
    /// Protocol:
    ///
    /// 1. Confirm the requesting user exists.
    /// 2. Open a transaction and lock the event row (`SELECT … FOR UPDATE`).
    /// 3. Check `seats_available` against the request — strictly after the
    ///    lock is held, never on a pre-lock read.
    /// 4. Deduct the seats and insert the booking row.
    /// 5. Commit.
    ///
    /// Any failure after step 2 drops the transaction guard, which rolls
    /// back: no partial deduction, no orphan booking row, and the pooled
    /// connection is returned on every exit path.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UserNotFound`] — unknown `user_id`.
    /// - [`ApiError::EventNotFound`] — unknown `event_id`.
    /// - [`ApiError::InsufficientCapacity`] — fewer than `seats` free.
    /// - [`ApiError::Timeout`] — pool acquisition or lock wait exceeded
    ///   its limit; safe to retry.
    /// - [`ApiError::Database`] — unexpected store failure.
    pub async fn create_booking(&self, request: NewBooking) -> Result<BookingId, ApiError> {
        if !self.repository.user_exists(request.user_id).await? {
            return Err(ApiError::UserNotFound(request.user_id));
        }

        let mut tx = self.repository.pool().begin().await?;

        let available = sqlx::query_scalar::<_, i32>(
            "SELECT seats_available FROM events WHERE id = $1 FOR UPDATE",
        )
        .bind(request.event_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(available) = available else {
            return Err(ApiError::EventNotFound(request.event_id));
        };

        if available < request.seats {
            return Err(ApiError::InsufficientCapacity {
                requested: request.seats,
                available,
            });
        }

        sqlx::query(
            "UPDATE events SET seats_available = seats_available - $2, updated_at = now() \
             WHERE id = $1",
        )
        .bind(request.event_id.as_uuid())
        .bind(request.seats)
        .execute(&mut *tx)
        .await?;

        let booking_id = BookingId::new();
        sqlx::query(
            "INSERT INTO bookings (id, user_id, event_id, seats_reserved) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(booking_id.as_uuid())
        .bind(request.user_id.as_uuid())
        .bind(request.event_id.as_uuid())
        .bind(request.seats)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            %booking_id,
            event_id = %request.event_id,
            user_id = %request.user_id,
            seats = request.seats,
            remaining = available - request.seats,
            "booking created"
        );
        Ok(booking_id)
    }
}
