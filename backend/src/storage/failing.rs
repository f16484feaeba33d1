//! Storage double for exercising storage-failure paths in tests.

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::plant::{NewPlant, Plant};
use crate::storage::repositories::PlantRepository;
use crate::storage::traits::PlantStorage;

/// Every write fails. Reads fail too, unless a repository is supplied to
/// serve them.
pub struct FailingStorage {
    reads: Option<PlantRepository>,
}

impl FailingStorage {
    /// Storage that is entirely unavailable
    pub fn unavailable() -> Self {
        Self { reads: None }
    }

    /// Storage that serves reads from `repository` but rejects every write
    pub fn read_only(repository: PlantRepository) -> Self {
        Self {
            reads: Some(repository),
        }
    }

    fn reads(&self) -> Result<&PlantRepository> {
        match &self.reads {
            Some(repository) => Ok(repository),
            None => bail!("database is unavailable"),
        }
    }
}

#[async_trait]
impl PlantStorage for FailingStorage {
    async fn create_plant(&self, _plant: &NewPlant) -> Result<i64> {
        bail!("database is read-only")
    }

    async fn list_plants(&self) -> Result<Vec<Plant>> {
        self.reads()?.list_plants().await
    }

    async fn get_plant(&self, plant_id: i64) -> Result<Option<Plant>> {
        self.reads()?.get_plant(plant_id).await
    }

    async fn update_last_watered(&self, _plant_id: i64, _date: NaiveDate) -> Result<bool> {
        bail!("database is read-only")
    }

    async fn delete_plant(&self, _plant_id: i64) -> Result<bool> {
        bail!("database is read-only")
    }
}
