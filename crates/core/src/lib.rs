//! Domain logic for the blind heatmap voting study.
//!
//! Everything in this crate is pure: the fixed method set and its validation,
//! per-participant progress arithmetic, asset URL construction, assignment
//! assembly, and the shuffler seam used to blind the method order. All I/O
//! (store access, label fetches, HTTP) lives in the sibling crates.

pub mod assignment;
pub mod catalog;
pub mod error;
pub mod methods;
pub mod progress;
pub mod shuffle;
pub mod types;
