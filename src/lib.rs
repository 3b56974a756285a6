//! # seatlock
//!
//! REST API backend for event seat booking. Clients create events with a
//! fixed seat capacity, register users, and reserve seats against an event.
//! The service guarantees that the total number of reserved seats never
//! exceeds an event's capacity, even when many booking requests race,
//! by serializing capacity checks on a PostgreSQL row lock.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP/JSON)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BookingService (service/)       ← seat-reservation protocol
//!     ├── EntityRepository (persistence/) ← event/user/booking CRUD
//!     │
//!     └── PostgreSQL (PgPool, row locks, cascade FKs)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
