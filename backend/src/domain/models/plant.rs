use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage and wire format for naive dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest accepted plant name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    /// Days between waterings, always >= 1 once stored
    pub watering_frequency: u32,
    pub last_watered: NaiveDate,
}

/// A validated plant that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlant {
    pub name: String,
    pub species: Option<String>,
    pub watering_frequency: u32,
    pub last_watered: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantValidationError {
    #[error("Plant name cannot be empty")]
    EmptyName,
    #[error("Plant name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Watering frequency is required")]
    MissingWateringFrequency,
    #[error("Watering frequency must be a whole number of days, got '{0}'")]
    InvalidWateringFrequency(String),
    #[error("Watering frequency must be at least 1 day, got {0}")]
    NonPositiveWateringFrequency(i64),
}

#[derive(Debug, thiserror::Error)]
pub enum PlantError {
    #[error(transparent)]
    Validation(#[from] PlantValidationError),
    #[error("Plant not found: {0}")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Parse a string-encoded watering frequency, rejecting anything below one day
pub fn parse_watering_frequency(raw: Option<&str>) -> Result<u32, PlantValidationError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(PlantValidationError::MissingWateringFrequency)?;

    let value: i64 = raw
        .parse()
        .map_err(|_| PlantValidationError::InvalidWateringFrequency(raw.to_string()))?;

    if value < 1 {
        return Err(PlantValidationError::NonPositiveWateringFrequency(value));
    }

    u32::try_from(value).map_err(|_| PlantValidationError::InvalidWateringFrequency(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watering_frequency() {
        assert_eq!(parse_watering_frequency(Some("7")), Ok(7));
        assert_eq!(parse_watering_frequency(Some(" 14 ")), Ok(14));
        assert_eq!(
            parse_watering_frequency(None),
            Err(PlantValidationError::MissingWateringFrequency)
        );
        assert_eq!(
            parse_watering_frequency(Some("")),
            Err(PlantValidationError::MissingWateringFrequency)
        );
        assert_eq!(
            parse_watering_frequency(Some("0")),
            Err(PlantValidationError::NonPositiveWateringFrequency(0))
        );
        assert_eq!(
            parse_watering_frequency(Some("-3")),
            Err(PlantValidationError::NonPositiveWateringFrequency(-3))
        );
        assert_eq!(
            parse_watering_frequency(Some("weekly")),
            Err(PlantValidationError::InvalidWateringFrequency("weekly".to_string()))
        );
        assert_eq!(
            parse_watering_frequency(Some("2.5")),
            Err(PlantValidationError::InvalidWateringFrequency("2.5".to_string()))
        );
    }

    #[test]
    fn test_frequency_beyond_u32_is_invalid() {
        let result = parse_watering_frequency(Some("99999999999"));
        assert!(matches!(result, Err(PlantValidationError::InvalidWateringFrequency(_))));
    }
}
