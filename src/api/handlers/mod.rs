//! REST endpoint handlers organized by resource.

pub mod booking;
pub mod event;
pub mod system;
pub mod user;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(event::routes())
        .merge(user::routes())
        .merge(booking::routes())
}
