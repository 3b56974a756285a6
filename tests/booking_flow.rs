//! Integration tests for the booking core against a live PostgreSQL.
//!
//! Ignored by default so `cargo test` passes without a database. Run
//! with a reachable store (see `AppConfig` defaults or `DATABASE_URL`):
//!
//! ```text
//! cargo test -- --ignored
//! ```

#![allow(clippy::panic)]

use std::sync::Arc;

use seatlock::config::AppConfig;
use seatlock::domain::{BookingId, EventId, EventPatch, NewBooking, NewEvent, NewUser, User, UserId};
use seatlock::error::ApiError;
use seatlock::persistence::{EntityRepository, schema};
use seatlock::service::BookingService;

async fn setup() -> (EntityRepository, BookingService) {
    let Ok(config) = AppConfig::from_env() else {
        panic!("configuration failed to load");
    };
    let Ok(pool) = schema::connect(&config).await else {
        panic!("could not connect to PostgreSQL; is it running?");
    };
    let Ok(()) = schema::init_schema(&pool).await else {
        panic!("schema creation failed");
    };
    let repository = EntityRepository::new(pool);
    let bookings = BookingService::new(repository.clone());
    (repository, bookings)
}

fn new_event(name: &str, total_seats: i32) -> NewEvent {
    let Ok(event) = NewEvent::new(name.to_string(), None, total_seats) else {
        panic!("test event input should be valid");
    };
    event
}

async fn register_user(repository: &EntityRepository) -> User {
    let email = format!("{}@example.com", uuid::Uuid::new_v4());
    let Ok(new) = NewUser::new("Test User".to_string(), email) else {
        panic!("test user input should be valid");
    };
    let Ok(user) = repository.create_user(new).await else {
        panic!("user registration failed");
    };
    user
}

async fn book(
    bookings: &BookingService,
    user_id: UserId,
    event_id: EventId,
    seats: i32,
) -> Result<BookingId, ApiError> {
    let Ok(request) = NewBooking::new(user_id, event_id, seats) else {
        panic!("test booking input should be valid");
    };
    bookings.create_booking(request).await
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn booking_deducts_seats_and_enforces_capacity() {
    let (repository, bookings) = setup().await;

    let Ok(event) = repository.create_event(new_event("Concert", 10)).await else {
        panic!("event creation failed");
    };
    assert_eq!(event.seats_available, 10);
    let user = register_user(&repository).await;

    // 7 of 10 → 3 left.
    assert!(book(&bookings, user.id, event.id, 7).await.is_ok());
    let Ok(after) = repository.get_event(event.id).await else {
        panic!("event disappeared");
    };
    assert_eq!(after.seats_available, 3);

    // 5 > 3 → rejected, count unchanged.
    let result = book(&bookings, user.id, event.id, 5).await;
    assert!(matches!(
        result,
        Err(ApiError::InsufficientCapacity {
            requested: 5,
            available: 3
        })
    ));
    let Ok(after) = repository.get_event(event.id).await else {
        panic!("event disappeared");
    };
    assert_eq!(after.seats_available, 3);

    // Exactly the remainder → 0 left.
    assert!(book(&bookings, user.id, event.id, 3).await.is_ok());
    let Ok(after) = repository.get_event(event.id).await else {
        panic!("event disappeared");
    };
    assert_eq!(after.seats_available, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn concurrent_bookings_never_oversell() {
    let (repository, bookings) = setup().await;

    let Ok(event) = repository.create_event(new_event("Rush", 10)).await else {
        panic!("event creation failed");
    };
    let user = register_user(&repository).await;

    // 20 racers for 2 seats each against capacity 10: exactly 5 can win.
    let bookings = Arc::new(bookings);
    let mut tasks = Vec::new();
    for _ in 0..20 {
        let engine = Arc::clone(&bookings);
        let (user_id, event_id) = (user.id, event.id);
        tasks.push(tokio::spawn(async move {
            book(&engine, user_id, event_id, 2).await
        }));
    }

    let mut won = 0;
    let mut lost = 0;
    for task in tasks {
        let Ok(result) = task.await else {
            panic!("booking task panicked");
        };
        match result {
            Ok(_) => won += 1,
            Err(ApiError::InsufficientCapacity { .. }) => lost += 1,
            Err(other) => panic!("unexpected booking failure: {other}"),
        }
    }
    assert_eq!(won, 5);
    assert_eq!(lost, 15);

    let Ok(after) = repository.get_event(event.id).await else {
        panic!("event disappeared");
    };
    assert_eq!(after.seats_available, 0);
    assert_eq!(after.total_seats, 10);

    let Ok(listed) = repository.list_bookings_for_event(event.id).await else {
        panic!("listing failed");
    };
    let reserved: i32 = listed.iter().map(|b| b.seats_reserved).sum();
    assert_eq!(reserved, 10);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn capacity_cannot_shrink_below_booked_seats() {
    let (repository, bookings) = setup().await;

    let Ok(event) = repository.create_event(new_event("Talk", 10)).await else {
        panic!("event creation failed");
    };
    let user = register_user(&repository).await;
    assert!(book(&bookings, user.id, event.id, 4).await.is_ok());

    // 4 booked; shrinking to 3 must fail and leave the event untouched.
    let patch = EventPatch {
        total_seats: Some(3),
        ..EventPatch::default()
    };
    let result = repository.update_event(event.id, patch).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));

    let Ok(unchanged) = repository.get_event(event.id).await else {
        panic!("event disappeared");
    };
    assert_eq!(unchanged.total_seats, 10);
    assert_eq!(unchanged.seats_available, 6);

    // Shrinking to exactly the booked floor leaves zero available.
    let patch = EventPatch {
        total_seats: Some(4),
        ..EventPatch::default()
    };
    let Ok(updated) = repository.update_event(event.id, patch).await else {
        panic!("shrink to booked floor should succeed");
    };
    assert_eq!(updated.total_seats, 4);
    assert_eq!(updated.seats_available, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn partial_update_leaves_omitted_fields_unchanged() {
    let (repository, _) = setup().await;

    let Ok(new) = NewEvent::new("Workshop".to_string(), Some("hands-on".to_string()), 25) else {
        panic!("test event input should be valid");
    };
    let Ok(event) = repository.create_event(new).await else {
        panic!("event creation failed");
    };

    let patch = EventPatch {
        name: Some("Masterclass".to_string()),
        ..EventPatch::default()
    };
    let Ok(updated) = repository.update_event(event.id, patch).await else {
        panic!("update failed");
    };
    assert_eq!(updated.name, "Masterclass");
    assert_eq!(updated.description.as_deref(), Some("hands-on"));
    assert_eq!(updated.total_seats, 25);
    assert_eq!(updated.seats_available, 25);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn duplicate_email_conflicts_and_first_user_survives() {
    let (repository, _) = setup().await;

    let email = format!("{}@example.com", uuid::Uuid::new_v4());
    let Ok(first) = NewUser::new("First".to_string(), email.clone()) else {
        panic!("test user input should be valid");
    };
    let Ok(first) = repository.create_user(first).await else {
        panic!("first registration failed");
    };

    let Ok(second) = NewUser::new("Second".to_string(), email.clone()) else {
        panic!("test user input should be valid");
    };
    let result = repository.create_user(second).await;
    assert!(matches!(result, Err(ApiError::DuplicateEmail(e)) if e == email));

    let Ok(still_there) = repository.get_user(first.id).await else {
        panic!("first user should remain queryable");
    };
    assert_eq!(still_there.email, email);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn deleting_an_event_cascades_its_bookings() {
    let (repository, bookings) = setup().await;

    let Ok(event) = repository.create_event(new_event("Doomed", 5)).await else {
        panic!("event creation failed");
    };
    let user = register_user(&repository).await;
    assert!(book(&bookings, user.id, event.id, 2).await.is_ok());

    let Ok(()) = repository.delete_event(event.id).await else {
        panic!("delete failed");
    };

    let result = repository.get_event(event.id).await;
    assert!(matches!(result, Err(ApiError::EventNotFound(_))));

    let Ok(listed) = repository.list_bookings_for_event(event.id).await else {
        panic!("listing failed");
    };
    assert!(listed.is_empty());

    let Ok(by_user) = repository.list_bookings_for_user(user.id).await else {
        panic!("listing failed");
    };
    assert!(by_user.iter().all(|b| b.event_id != event.id));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn unknown_parent_listings_return_empty() {
    let (repository, _) = setup().await;

    let Ok(for_event) = repository.list_bookings_for_event(EventId::new()).await else {
        panic!("listing failed");
    };
    assert!(for_event.is_empty());

    let Ok(for_user) = repository.list_bookings_for_user(UserId::new()).await else {
        panic!("listing failed");
    };
    assert!(for_user.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn booking_against_missing_references_is_not_found() {
    let (repository, bookings) = setup().await;

    // Unknown user.
    let result = book(&bookings, UserId::new(), EventId::new(), 1).await;
    assert!(matches!(result, Err(ApiError::UserNotFound(_))));

    // Known user, unknown event.
    let user = register_user(&repository).await;
    let result = book(&bookings, user.id, EventId::new(), 1).await;
    assert!(matches!(result, Err(ApiError::EventNotFound(_))));
}
