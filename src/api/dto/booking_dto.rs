//! Booking DTOs: the reservation request and the enriched listing rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BookingDetail, BookingId, EventBooking, EventId, UserBooking, UserId};

/// Request body for `POST /api/bookings`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    /// The requesting user.
    pub user_id: UserId,
    /// The target event.
    pub event_id: EventId,
    /// Seats to reserve, strictly positive.
    pub seats: i32,
}

/// Response body for `POST /api/bookings` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateBookingResponse {
    /// Identifier of the new booking.
    pub booking_id: BookingId,
}

/// Booking row in `GET /api/events/:id/bookings` responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventBookingDto {
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

impl From<EventBooking> for EventBookingDto {
    fn from(b: EventBooking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            user_name: b.user_name,
            user_email: b.user_email,
            seats_reserved: b.seats_reserved,
            created_at: b.created_at,
        }
    }
}

/// Booking row in `GET /api/users/:id/bookings` responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserBookingDto {
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

impl From<UserBooking> for UserBookingDto {
    fn from(b: UserBooking) -> Self {
        Self {
            id: b.id,
            event_id: b.event_id,
            event_name: b.event_name,
            seats_reserved: b.seats_reserved,
            created_at: b.created_at,
        }
    }
}

/// Booking row in `GET /api/bookings` responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
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

impl From<BookingDetail> for BookingDto {
    fn from(b: BookingDetail) -> Self {
        Self {
            id: b.id,
            event_id: b.event_id,
            event_name: b.event_name,
            user_id: b.user_id,
            user_name: b.user_name,
            user_email: b.user_email,
            seats_reserved: b.seats_reserved,
            created_at: b.created_at,
        }
    }
}
