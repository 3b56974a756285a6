//! Request and response DTOs for the REST surface.

pub mod booking_dto;
pub mod event_dto;
pub mod user_dto;

pub use booking_dto::{
    BookingDto, CreateBookingRequest, CreateBookingResponse, EventBookingDto, UserBookingDto,
};
pub use event_dto::{CreateEventRequest, EventResponse, UpdateEventRequest};
pub use user_dto::{CreateUserRequest, UserResponse};
