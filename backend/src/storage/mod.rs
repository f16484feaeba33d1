//! # Storage Module
//!
//! Handles persistence of plant records.
//!
//! The domain layer only sees the [`PlantStorage`] trait; the SQLite-backed
//! [`PlantRepository`] is the production implementation. Every operation is a
//! single SQL statement, so atomicity is whatever SQLite gives one statement.
//! There is no application-level locking: two concurrent updates of the same
//! plant are last-writer-wins.

pub mod connection;
#[cfg(test)]
pub mod failing;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
#[cfg(test)]
pub use failing::FailingStorage;
pub use repositories::PlantRepository;
pub use traits::PlantStorage;
