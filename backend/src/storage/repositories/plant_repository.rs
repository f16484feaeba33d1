use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::plant::{NewPlant, Plant, ISO_DATE_FORMAT};
use crate::storage::connection::DbConnection;
use crate::storage::traits::PlantStorage;

/// Repository for plant operations
#[derive(Clone)]
pub struct PlantRepository {
    db: DbConnection,
}

impl PlantRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_plant(row: &SqliteRow) -> Result<Plant> {
        let id: i64 = row.get("id");
        let frequency: i64 = row.get("watering_frequency");
        let last_watered: String = row.get("last_watered");

        let watering_frequency = u32::try_from(frequency)
            .ok()
            .filter(|f| *f >= 1)
            .with_context(|| format!("Plant {} has invalid watering_frequency {}", id, frequency))?;
        let last_watered = NaiveDate::parse_from_str(&last_watered, ISO_DATE_FORMAT)
            .with_context(|| format!("Plant {} has invalid last_watered '{}'", id, last_watered))?;

        Ok(Plant {
            id,
            name: row.get("name"),
            species: row.get("species"),
            watering_frequency,
            last_watered,
        })
    }
}

#[async_trait]
impl PlantStorage for PlantRepository {
    async fn create_plant(&self, plant: &NewPlant) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO plants (name, species, watering_frequency, last_watered)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&plant.name)
        .bind(&plant.species)
        .bind(i64::from(plant.watering_frequency))
        .bind(plant.last_watered.format(ISO_DATE_FORMAT).to_string())
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn list_plants(&self) -> Result<Vec<Plant>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, species, watering_frequency, last_watered
            FROM plants
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_plant).collect()
    }

    async fn get_plant(&self, plant_id: i64) -> Result<Option<Plant>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, species, watering_frequency, last_watered
            FROM plants
            WHERE id = ?
            "#,
        )
        .bind(plant_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_plant).transpose()
    }

    async fn update_last_watered(&self, plant_id: i64, date: NaiveDate) -> Result<bool> {
        let result = sqlx::query("UPDATE plants SET last_watered = ? WHERE id = ?")
            .bind(date.format(ISO_DATE_FORMAT).to_string())
            .bind(plant_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_plant(&self, plant_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM plants WHERE id = ?")
            .bind(plant_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> PlantRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        PlantRepository::new(db)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_plant(name: &str, species: Option<&str>, frequency: u32) -> NewPlant {
        NewPlant {
            name: name.to_string(),
            species: species.map(str::to_string),
            watering_frequency: frequency,
            last_watered: date(2024, 6, 1),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_plant() {
        let repo = setup_test().await;

        let id = repo
            .create_plant(&new_plant("Fern", Some("Nephrolepis"), 7))
            .await
            .expect("Failed to create plant");

        let plant = repo.get_plant(id).await.expect("Failed to get plant").unwrap();
        assert_eq!(plant.id, id);
        assert_eq!(plant.name, "Fern");
        assert_eq!(plant.species.as_deref(), Some("Nephrolepis"));
        assert_eq!(plant.watering_frequency, 7);
        assert_eq!(plant.last_watered, date(2024, 6, 1));
    }

    #[tokio::test]
    async fn test_species_is_optional() {
        let repo = setup_test().await;

        let id = repo.create_plant(&new_plant("Mystery", None, 3)).await.unwrap();
        let plant = repo.get_plant(id).await.unwrap().unwrap();
        assert!(plant.species.is_none());
    }

    #[tokio::test]
    async fn test_list_plants_in_insertion_order() {
        let repo = setup_test().await;
        assert!(repo.list_plants().await.unwrap().is_empty());

        for name in ["Zebra Plant", "Aloe", "Monstera"] {
            repo.create_plant(&new_plant(name, None, 5)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_plants()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Zebra Plant", "Aloe", "Monstera"]);
    }

    #[tokio::test]
    async fn test_update_last_watered() {
        let repo = setup_test().await;
        let id = repo.create_plant(&new_plant("Fern", None, 7)).await.unwrap();

        let updated = repo.update_last_watered(id, date(2024, 6, 20)).await.unwrap();
        assert!(updated);

        let plant = repo.get_plant(id).await.unwrap().unwrap();
        assert_eq!(plant.last_watered, date(2024, 6, 20));
        assert_eq!(plant.name, "Fern");
        assert_eq!(plant.watering_frequency, 7);
    }

    #[tokio::test]
    async fn test_update_unknown_plant_reports_not_found() {
        let repo = setup_test().await;
        let updated = repo.update_last_watered(999, date(2024, 6, 20)).await.unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete_plant() {
        let repo = setup_test().await;
        let id = repo.create_plant(&new_plant("Fern", None, 7)).await.unwrap();

        assert!(repo.delete_plant(id).await.unwrap());
        assert!(repo.get_plant(id).await.unwrap().is_none());

        // Second delete finds nothing
        assert!(!repo.delete_plant(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_date_is_reported() {
        let repo = setup_test().await;
        sqlx::query(
            "INSERT INTO plants (name, species, watering_frequency, last_watered) VALUES (?, ?, ?, ?)",
        )
        .bind("Broken")
        .bind(None::<String>)
        .bind(3_i64)
        .bind("not-a-date")
        .execute(repo.db.pool())
        .await
        .unwrap();

        let err = repo.list_plants().await.unwrap_err();
        assert!(err.to_string().contains("invalid last_watered"));
    }
}
