//! # Domain Module
//!
//! Business logic for the plant tracker, independent of HTTP and storage.
//!
//! - **plant_service**: validation and CRUD over the injected plant storage
//! - **watering_schedule**: pure projection of next waterings and day buckets
//! - **calendar**: month grid generation
//!
//! ## Business Rules
//!
//! - Plants must have a non-empty name
//! - Watering frequency is a whole number of days, at least 1
//! - Adding or watering a plant stamps today's date as last watered
//! - A plant that is due today or overdue needs water

pub mod calendar;
pub mod commands;
pub mod models;
pub mod plant_service;
pub mod watering_schedule;

pub use calendar::*;
pub use commands::*;
pub use plant_service::*;
pub use watering_schedule::*;
