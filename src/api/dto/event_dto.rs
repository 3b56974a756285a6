//! Event DTOs for create, update, get, and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Event, EventId, EventPatch};

/// Request body for `POST /api/events`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Display name, non-empty.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Total seat capacity, strictly positive.
    pub total_seats: i32,
}

/// Request body for `PUT /api/events/:id`. Omitted fields are unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    /// Replacement name, if any.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement total capacity, if any. Rejected when it would shrink
    /// below the seats already booked.
    #[serde(default)]
    pub total_seats: Option<i32>,
}

impl From<UpdateEventRequest> for EventPatch {
    fn from(req: UpdateEventRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            total_seats: req.total_seats,
        }
    }
}

/// Event representation returned by every event endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    /// Event identifier.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Total seat capacity.
    pub total_seats: i32,
    /// Remaining free seats.
    pub seats_available: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            total_seats: event.total_seats,
            seats_available: event.seats_available,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn update_request_defaults_to_empty_patch() {
        let Ok(req) = serde_json::from_str::<UpdateEventRequest>("{}") else {
            panic!("expected empty body to deserialize");
        };
        assert!(req.name.is_none());
        assert!(req.description.is_none());
        assert!(req.total_seats.is_none());
    }

    #[test]
    fn create_request_requires_total_seats() {
        let result = serde_json::from_str::<CreateEventRequest>(r#"{"name":"Concert"}"#);
        assert!(result.is_err());
    }
}
