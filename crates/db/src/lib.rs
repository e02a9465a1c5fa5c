//! Persistence for participant records.
//!
//! The store is an injected dependency behind the [`VoterStore`] trait:
//! point lookups, inserts, and atomic vote updates keyed by `user_id`. The
//! production implementation is PostgreSQL ([`PostgresStore`]); tests use the
//! in-memory [`FakeStore`].

pub mod error;
pub mod fake;
pub mod models;
pub mod postgres;
pub mod store;

pub use error::StoreError;
pub use fake::FakeStore;
pub use models::Participant;
pub use postgres::PostgresStore;
pub use store::VoterStore;
