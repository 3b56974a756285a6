//! Booking entity and the enriched read models returned by listings.

use chrono::{DateTime, Utc};

use super::id::{BookingId, EventId, UserId};
use crate::error::ApiError;

/// Validated input for reserving seats.
///
/// A booking, once created, is immutable; it disappears only as a cascade
/// effect of deleting its event or user. Reads go through the enriched
/// models below.
#[derive(Debug, Clone, Copy)]
pub struct NewBooking {
    /// The requesting user.
    pub user_id: UserId,
    /// The target event.
    pub event_id: EventId,
    /// Seats to reserve, strictly positive.
    pub seats: i32,
}

impl NewBooking {
    /// Validates the raw fields of a booking request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when `seats` is not strictly
    /// positive.
    pub fn new(user_id: UserId, event_id: EventId, seats: i32) -> Result<Self, ApiError> {
        if seats <= 0 {
            return Err(ApiError::Validation(
                "seats must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            user_id,
            event_id,
            seats,
        })
    }
}

/// A booking row enriched with the booker's name and email, as returned
/// when listing an event's bookings.
#[derive(Debug, Clone)]
pub struct EventBooking {
    /// Booking identifier.
    pub id: BookingId,
    /// The booking user.
    pub user_id: UserId,
    /// Booker's display name.
    pub user_name: String,
    /// Booker's email address.
    pub user_email: String,
    /// Seats reserved.
    pub seats_reserved: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A booking row enriched with the event's name, as returned when listing
/// a user's bookings.
#[derive(Debug, Clone)]
pub struct UserBooking {
    /// Booking identifier.
    pub id: BookingId,
    /// The booked event.
    pub event_id: EventId,
    /// Event display name.
    pub event_name: String,
    /// Seats reserved.
    pub seats_reserved: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A booking row enriched with both counterpart names, as returned by the
/// global booking listing.
#[derive(Debug, Clone)]
pub struct BookingDetail {
    /// Booking identifier.
    pub id: BookingId,
    /// The booked event.
    pub event_id: EventId,
    /// Event display name.
    pub event_name: String,
    /// The booking user.
    pub user_id: UserId,
    /// Booker's display name.
    pub user_name: String,
    /// Booker's email address.
    pub user_email: String,
    /// Seats reserved.
    pub seats_reserved: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_seats() {
        let result = NewBooking::new(UserId::new(), EventId::new(), 0);
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn rejects_negative_seats() {
        assert!(NewBooking::new(UserId::new(), EventId::new(), -1).is_err());
    }

    #[test]
    fn accepts_positive_seats() {
        let Ok(booking) = NewBooking::new(UserId::new(), EventId::new(), 4) else {
            panic!("expected valid booking");
        };
        assert_eq!(booking.seats, 4);
    }
}
