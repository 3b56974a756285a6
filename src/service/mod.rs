//! Service layer: the seat-reservation engine.

pub mod booking;

pub use booking::BookingService;
