//! Domain types: entities, typed identifiers, and the pure capacity
//! arithmetic that every seat-touching write path goes through.

pub mod booking;
pub mod event;
pub mod id;
pub mod user;

pub use booking::{BookingDetail, EventBooking, NewBooking, UserBooking};
pub use event::{Event, EventPatch, NewEvent};
pub use id::{BookingId, EventId, UserId};
pub use user::{NewUser, User};
