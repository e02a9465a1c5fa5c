//! Request handlers for the survey endpoints.
//!
//! Each submodule covers one operation group: registration and existence
//! checks, the next-assignment read, and vote submission. Handlers delegate
//! domain decisions to `heatvote_core`, persistence to the injected store,
//! and map errors via [`crate::error::AppError`].

pub mod assignment;
pub mod users;
pub mod votes;
