use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A plant enriched with its derived schedule, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantView {
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    pub watering_frequency: u32,
    /// Human-readable last watered date, e.g. "June 01, 2024"
    pub last_watered: String,
    /// ISO date (YYYY-MM-DD)
    pub last_watered_iso: String,
    /// ISO date (YYYY-MM-DD)
    pub next_watering: String,
    /// Human-readable next watering date, e.g. "June 08, 2024"
    pub next_watering_str: String,
    /// Negative when the plant is overdue
    pub days_until_watering: i64,
    pub needs_water: bool,
}

/// A single cell in the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub day: u32,
    /// False for leading/trailing days borrowed from adjacent months
    pub in_current_month: bool,
    pub is_today: bool,
    /// Plants due on this day (always empty outside the current month)
    pub plants: Vec<String>,
}

/// Seven consecutive days, Monday first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarWeek {
    pub days: Vec<CalendarCell>,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub plants: Vec<PlantView>,
    pub weeks: Vec<CalendarWeek>,
    /// Day of month of the reference date
    pub today: u32,
    pub current_month_name: String,
    pub current_month: u32,
    pub current_year: i32,
    pub lookahead_days: u32,
    /// Day of month -> names of plants due that day
    pub watering_schedule: BTreeMap<u32, Vec<String>>,
}

/// Form body for POST /add.
///
/// Every field is optional at the wire level so that missing input is
/// reported as a validation error instead of an extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddPlantForm {
    pub name: Option<String>,
    pub species: Option<String>,
    /// String-encoded integer
    pub watering_frequency: Option<String>,
}
