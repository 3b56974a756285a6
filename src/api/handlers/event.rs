//! Event handlers: create, list, get, update, delete, and the event's
//! booking listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateEventRequest, EventBookingDto, EventResponse, UpdateEventRequest};
use crate::app_state::AppState;
use crate::domain::{EventId, NewEvent};
use crate::error::{ApiError, ErrorResponse};

/// `POST /api/events` — Create an event.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on an empty name or non-positive
/// capacity.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "Events",
    summary = "Create an event",
    description = "Creates an event with the given seat capacity. All seats start available.",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Invalid name or capacity", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewEvent::new(req.name, req.description, req.total_seats)?;
    let event = state.repository.create_event(new).await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// `GET /api/events` — List all events, newest first.
///
/// # Errors
///
/// Returns [`ApiError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    summary = "List events",
    responses(
        (status = 200, description = "All events, newest first", body = Vec<EventResponse>),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let events = state.repository.list_events().await?;
    let body: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(body))
}

/// `GET /api/events/:id` — Get one event.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] when the id is unknown.
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "Events",
    summary = "Get an event",
    params(("id" = uuid::Uuid, Path, description = "Event UUID")),
    responses(
        (status = 200, description = "Event details", body = EventResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.repository.get_event(EventId::from_uuid(id)).await?;
    Ok(Json(EventResponse::from(event)))
}

/// `PUT /api/events/:id` — Partially update an event.
///
/// Omitted fields are left unchanged. A new `total_seats` recomputes
/// `seats_available` against the seats already booked.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] for an unknown id and
/// [`ApiError::Validation`] when the capacity would shrink below the
/// booked floor.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = "Events",
    summary = "Update an event",
    params(("id" = uuid::Uuid, Path, description = "Event UUID")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated event", body = EventResponse),
        (status = 400, description = "Invalid field or capacity below booked seats", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .repository
        .update_event(EventId::from_uuid(id), req.into())
        .await?;
    Ok(Json(EventResponse::from(event)))
}

/// `DELETE /api/events/:id` — Delete an event and, by cascade, its
/// bookings. Seats are not restored anywhere; the event is gone.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] when the id is unknown.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "Events",
    summary = "Delete an event",
    params(("id" = uuid::Uuid, Path, description = "Event UUID")),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.repository.delete_event(EventId::from_uuid(id)).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/events/:id/bookings` — List an event's bookings with booker
/// name and email, newest first. An unknown event id yields an empty
/// list.
///
/// # Errors
///
/// Returns [`ApiError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/events/{id}/bookings",
    tag = "Events",
    summary = "List an event's bookings",
    params(("id" = uuid::Uuid, Path, description = "Event UUID")),
    responses(
        (status = 200, description = "Bookings for the event, newest first", body = Vec<EventBookingDto>),
    )
)]
pub async fn list_event_bookings(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state
        .repository
        .list_bookings_for_event(EventId::from_uuid(id))
        .await?;
    let body: Vec<EventBookingDto> = bookings.into_iter().map(EventBookingDto::from).collect();
    Ok(Json(body))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/bookings", get(list_event_bookings))
}
