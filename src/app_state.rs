//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::EntityRepository;
use crate::service::BookingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Repository for event/user CRUD and booking listings.
    pub repository: EntityRepository,
    /// Transactional booking engine.
    pub bookings: Arc<BookingService>,
}
