//! # REST API Interface Layer
//!
//! - `GET /` dashboard view model (plants, month grid, watering buckets)
//! - `POST /add` create a plant from a form, then redirect to `/`
//! - `GET /water/:id` mark a plant watered today, then redirect to `/`
//! - `GET /delete/:id` delete a plant, then redirect to `/`
//!
//! Unknown ids on water/delete are not errors; the redirect happens anyway.

pub mod mappers;
pub mod plant_apis;
