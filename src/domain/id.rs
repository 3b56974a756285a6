//! Type-safe entity identifiers.
//!
//! Newtype wrappers around [`uuid::Uuid`] (v4) so that event, user, and
//! booking identifiers cannot be confused with one another. Identifiers
//! are generated server-side at insert time.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = uuid::Uuid)]
pub struct EventId(uuid::Uuid);

/// Unique identifier for a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = uuid::Uuid)]
pub struct UserId(uuid::Uuid);

/// Unique identifier for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = uuid::Uuid)]
pub struct BookingId(uuid::Uuid);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Creates a new random identifier (UUID v4).
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Wraps an existing [`uuid::Uuid`].
            #[must_use]
            pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner [`uuid::Uuid`].
            #[must_use]
            pub const fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

impl_id!(EventId);
impl_id!(UserId);
impl_id!(BookingId);

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        assert_ne!(EventId::new(), EventId::new());
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn display_is_uuid_format() {
        let id = BookingId::new();
        let s = format!("{id}");
        assert_eq!(s.len(), 36);
        assert!(s.contains('-'));
    }

    #[test]
    fn serde_is_transparent() {
        let id = EventId::new();
        let Ok(json) = serde_json::to_string(&id) else {
            panic!("serialization failed");
        };
        assert_eq!(json, format!("\"{id}\""));
        let Ok(back) = serde_json::from_str::<EventId>(&json) else {
            panic!("deserialization failed");
        };
        assert_eq!(id, back);
    }

    #[test]
    fn from_uuid_round_trip() {
        let uuid = uuid::Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }
}
