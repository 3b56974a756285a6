//! Booking handlers: seat reservation and the global booking listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{BookingDto, CreateBookingRequest, CreateBookingResponse};
use crate::app_state::AppState;
use crate::domain::NewBooking;
use crate::error::{ApiError, ErrorResponse};

/// `POST /api/bookings` — Reserve seats on an event.
///
/// The reservation runs as a single transaction that locks the event row,
/// so concurrent requests against the same event are serialized and the
/// capacity check never sees a stale count.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for non-positive seats,
/// [`ApiError::UserNotFound`] / [`ApiError::EventNotFound`] for unknown
/// references, and [`ApiError::InsufficientCapacity`] when fewer seats
/// remain than requested.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    summary = "Reserve seats",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Seats reserved", body = CreateBookingResponse),
        (status = 400, description = "Invalid seats or insufficient capacity", body = ErrorResponse),
        (status = 404, description = "User or event not found", body = ErrorResponse),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewBooking::new(req.user_id, req.event_id, req.seats)?;
    let booking_id = state.bookings.create_booking(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse { booking_id }),
    ))
}

/// `GET /api/bookings` — List every booking with event and user names,
/// newest first.
///
/// # Errors
///
/// Returns [`ApiError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    summary = "List all bookings",
    responses(
        (status = 200, description = "All bookings, newest first", body = Vec<BookingDto>),
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let bookings = state.repository.list_bookings().await?;
    let body: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(body))
}

/// Booking routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", get(list_bookings).post(create_booking))
}
