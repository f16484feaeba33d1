//! # Storage Traits
//!
//! Storage abstraction that lets the domain layer work against any backend.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::plant::{NewPlant, Plant};

/// Trait defining the interface for plant storage operations
#[async_trait]
pub trait PlantStorage: Send + Sync {
    /// Insert a new plant and return the id assigned by the store
    async fn create_plant(&self, plant: &NewPlant) -> Result<i64>;

    /// List all plants in insertion order
    async fn list_plants(&self) -> Result<Vec<Plant>>;

    /// Retrieve a specific plant by ID
    async fn get_plant(&self, plant_id: i64) -> Result<Option<Plant>>;

    /// Set the last watered date of a plant
    /// Returns true if the plant was found and updated, false otherwise
    async fn update_last_watered(&self, plant_id: i64, date: NaiveDate) -> Result<bool>;

    /// Delete a plant
    /// Returns true if the plant was found and deleted, false otherwise
    async fn delete_plant(&self, plant_id: i64) -> Result<bool>;
}
