//! # Rollcall Data
//!
//! Registration records and the repository seam the report commands read
//! through. The persistence layer behind the trait is an external
//! collaborator; this crate ships an in-memory implementation for local use
//! and tests.

pub mod models;
pub mod repo;

pub use models::{Character, RegisteredUser};
pub use repo::{MemoryUserDataRepo, UserDataRepo};
