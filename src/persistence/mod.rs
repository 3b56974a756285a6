//! Persistence layer: PostgreSQL pool bootstrap, idempotent schema, and
//! the entity repository.
//!
//! All coordination between concurrent requests is delegated to the store
//! via row-level locking inside transactions, never to in-process locks,
//! because the store may be shared by multiple process instances.

pub mod repository;
pub mod schema;

pub use repository::EntityRepository;
