use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::plants::CreatePlantCommand;
use crate::domain::models::plant::{
    parse_watering_frequency, NewPlant, Plant, PlantError, PlantValidationError, MAX_NAME_LENGTH,
};
use crate::storage::PlantStorage;

/// Service for managing plant records
#[derive(Clone)]
pub struct PlantService {
    storage: Arc<dyn PlantStorage>,
}

impl PlantService {
    pub fn new(storage: Arc<dyn PlantStorage>) -> Self {
        Self { storage }
    }

    /// The local calendar date used to stamp waterings
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Add a new plant, watered today
    pub async fn create_plant(&self, command: CreatePlantCommand) -> Result<Plant, PlantError> {
        self.create_plant_on(command, Self::today()).await
    }

    /// Add a new plant with an explicit last watered date
    pub async fn create_plant_on(
        &self,
        command: CreatePlantCommand,
        today: NaiveDate,
    ) -> Result<Plant, PlantError> {
        info!("Creating plant: {:?}", command);

        let new_plant = match Self::validate_create_command(command, today) {
            Ok(plant) => plant,
            Err(e) => {
                warn!("Rejected plant: {}", e);
                return Err(e.into());
            }
        };

        let id = self.storage.create_plant(&new_plant).await?;

        info!("Created plant: {} with ID: {}", new_plant.name, id);

        Ok(Plant {
            id,
            name: new_plant.name,
            species: new_plant.species,
            watering_frequency: new_plant.watering_frequency,
            last_watered: new_plant.last_watered,
        })
    }

    /// List all plants
    pub async fn list_plants(&self) -> Result<Vec<Plant>, PlantError> {
        let plants = self.storage.list_plants().await?;
        info!("Found {} plants", plants.len());
        Ok(plants)
    }

    /// Mark a plant as watered today.
    /// Returns `None` when the plant does not exist.
    pub async fn water_plant(&self, plant_id: i64) -> Result<Option<Plant>, PlantError> {
        self.water_plant_on(plant_id, Self::today()).await
    }

    /// Mark a plant as watered on a given date
    pub async fn water_plant_on(
        &self,
        plant_id: i64,
        date: NaiveDate,
    ) -> Result<Option<Plant>, PlantError> {
        info!("Watering plant {} on {}", plant_id, date);

        if !self.storage.update_last_watered(plant_id, date).await? {
            warn!("{}, nothing to water", PlantError::NotFound(plant_id));
            return Ok(None);
        }

        Ok(self.storage.get_plant(plant_id).await?)
    }

    /// Delete a plant.
    /// Returns false when there was nothing to delete.
    pub async fn delete_plant(&self, plant_id: i64) -> Result<bool, PlantError> {
        info!("Deleting plant: {}", plant_id);

        let deleted = self.storage.delete_plant(plant_id).await?;
        if deleted {
            info!("Deleted plant: {}", plant_id);
        } else {
            warn!("{}, nothing to delete", PlantError::NotFound(plant_id));
        }

        Ok(deleted)
    }

    /// Validate raw input and build the record to insert
    fn validate_create_command(
        command: CreatePlantCommand,
        today: NaiveDate,
    ) -> Result<NewPlant, PlantValidationError> {
        let name = command.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(PlantValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(PlantValidationError::NameTooLong);
        }

        let watering_frequency = parse_watering_frequency(command.watering_frequency.as_deref())?;

        let species = command
            .species
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(NewPlant {
            name: name.to_string(),
            species,
            watering_frequency,
            last_watered: today,
        })
    }
}
