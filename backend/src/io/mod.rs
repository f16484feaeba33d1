//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain logic.
//!
//! Handlers translate form and path input into domain commands, map domain
//! results to the `shared` DTOs and convert domain errors into status codes.

pub mod rest;
