//! Event entity and capacity arithmetic.

use chrono::{DateTime, Utc};

use super::id::EventId;
use crate::error::ApiError;

/// A bookable event with a fixed total capacity and a live count of
/// remaining seats.
///
/// Invariant: `seats_available = total_seats − Σ(seats_reserved)` over the
/// event's bookings. The count is maintained incrementally — decremented by
/// successful bookings, recomputed on capacity edits — never rebuilt from
/// the bookings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Store-assigned identifier.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Total capacity, fixed at creation, adjustable via update subject to
    /// the already-booked floor.
    pub total_seats: i32,
    /// Remaining free seats. Always within `0..=total_seats`.
    pub seats_available: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Display name, non-empty.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Total capacity, strictly positive.
    pub total_seats: i32,
}

impl NewEvent {
    /// Validates the raw fields of an event-creation request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when `name` is empty (after
    /// trimming) or `total_seats` is not strictly positive.
    pub fn new(
        name: String,
        description: Option<String>,
        total_seats: i32,
    ) -> Result<Self, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("event name must not be empty".to_string()));
        }
        if total_seats <= 0 {
            return Err(ApiError::Validation(
                "total_seats must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            name,
            description,
            total_seats,
        })
    }
}

/// Partial update for an event. Fields left as `None` are unchanged.
///
/// Modeled as a patch rather than a full overwrite so that an omitted
/// field can never null out stored data.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    /// Replacement name, if any.
    pub name: Option<String>,
    /// Replacement description, if any.
    pub description: Option<String>,
    /// Replacement total capacity, if any.
    pub total_seats: Option<i32>,
}

impl EventPatch {
    /// Validates the patch fields that can be checked without store state.
    ///
    /// The already-booked floor on `total_seats` is checked later, against
    /// the locked row, by [`recompute_available`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when a supplied `name` is empty or
    /// a supplied `total_seats` is not strictly positive.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(ApiError::Validation("event name must not be empty".to_string()));
        }
        if let Some(total) = self.total_seats
            && total <= 0
        {
            return Err(ApiError::Validation(
                "total_seats must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Recomputes `seats_available` for a capacity change.
///
/// `booked = total_old − available_old` seats are already committed; the
/// new capacity must not shrink below them. Must be called on values read
/// under the same lock that the subsequent write holds, otherwise a
/// concurrent booking can invalidate the arithmetic.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when `total_new` is smaller than the
/// number of already-booked seats.
pub fn recompute_available(
    total_old: i32,
    available_old: i32,
    total_new: i32,
) -> Result<i32, ApiError> {
    let booked = total_old - available_old;
    if total_new < booked {
        return Err(ApiError::Validation(format!(
            "cannot reduce total_seats to {total_new}: {booked} seats already booked"
        )));
    }
    Ok(total_new - booked)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_event_rejects_empty_name() {
        let result = NewEvent::new("   ".to_string(), None, 10);
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn new_event_rejects_non_positive_capacity() {
        assert!(NewEvent::new("Concert".to_string(), None, 0).is_err());
        assert!(NewEvent::new("Concert".to_string(), None, -3).is_err());
    }

    #[test]
    fn new_event_accepts_valid_input() {
        let Ok(event) = NewEvent::new("Concert".to_string(), Some("live".to_string()), 10) else {
            panic!("expected valid event");
        };
        assert_eq!(event.total_seats, 10);
    }

    #[test]
    fn patch_rejects_empty_name() {
        let patch = EventPatch {
            name: Some(String::new()),
            ..EventPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn patch_rejects_non_positive_capacity() {
        let patch = EventPatch {
            total_seats: Some(0),
            ..EventPatch::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(EventPatch::default().validate().is_ok());
    }

    #[test]
    fn recompute_grows_capacity() {
        // 10 total, 3 free → 7 booked; growing to 20 leaves 13 free.
        let Ok(available) = recompute_available(10, 3, 20) else {
            panic!("expected recompute to succeed");
        };
        assert_eq!(available, 13);
    }

    #[test]
    fn recompute_shrinks_to_booked_floor() {
        // 7 booked; shrinking to exactly 7 leaves 0 free.
        let Ok(available) = recompute_available(10, 3, 7) else {
            panic!("expected recompute to succeed");
        };
        assert_eq!(available, 0);
    }

    #[test]
    fn recompute_rejects_shrink_below_booked() {
        let result = recompute_available(10, 3, 6);
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
