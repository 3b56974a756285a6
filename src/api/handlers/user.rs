//! User handlers: register, get, and the user's booking listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateUserRequest, UserBookingDto, UserResponse};
use crate::app_state::AppState;
use crate::domain::{NewUser, UserId};
use crate::error::{ApiError, ErrorResponse};

/// `POST /api/users` — Register a user.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on an empty field and
/// [`ApiError::DuplicateEmail`] when the email is already registered.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    summary = "Register a user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Empty name or email", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewUser::new(req.name, req.email)?;
    let user = state.repository.create_user(new).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// `GET /api/users/:id` — Get one user.
///
/// # Errors
///
/// Returns [`ApiError::UserNotFound`] when the id is unknown.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    summary = "Get a user",
    params(("id" = uuid::Uuid, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.repository.get_user(UserId::from_uuid(id)).await?;
    Ok(Json(UserResponse::from(user)))
}

/// `GET /api/users/:id/bookings` — List a user's bookings with the event
/// name, newest first. An unknown user id yields an empty list.
///
/// # Errors
///
/// Returns [`ApiError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/users/{id}/bookings",
    tag = "Users",
    summary = "List a user's bookings",
    params(("id" = uuid::Uuid, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Bookings by the user, newest first", body = Vec<UserBookingDto>),
    )
)]
pub async fn list_user_bookings(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = state
        .repository
        .list_bookings_for_user(UserId::from_uuid(id))
        .await?;
    let body: Vec<UserBookingDto> = bookings.into_iter().map(UserBookingDto::from).collect();
    Ok(Json(body))
}

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/bookings", get(list_user_bookings))
}
