//! REST API layer: route handlers, DTOs, router composition, and the
//! OpenAPI document.
//!
//! Resource endpoints are mounted under `/api`; `/health` sits at the
//! root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering the full REST surface.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::event::create_event,
        handlers::event::list_events,
        handlers::event::get_event,
        handlers::event::update_event,
        handlers::event::delete_event,
        handlers::event::list_event_bookings,
        handlers::user::create_user,
        handlers::user::get_user,
        handlers::user::list_user_bookings,
        handlers::booking::create_booking,
        handlers::booking::list_bookings,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Events", description = "Event capacity management"),
        (name = "Users", description = "User registration"),
        (name = "Bookings", description = "Seat reservation"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}
