//! Watering projection.
//!
//! Pure date arithmetic: given stored plants and a reference date, derive when
//! each plant next needs water and which days of the reference month have
//! waterings due. Nothing here touches storage or formats strings.

use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

use crate::domain::models::plant::Plant;

/// Number of days ahead over which recurring waterings are expanded.
///
/// The expansion runs `window / frequency + 1` steps from the first due date,
/// which always overshoots a single month for daily plants.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 30;

/// Largest accepted lookahead window, roughly ten years
pub const MAX_LOOKAHEAD_DAYS: u32 = 3650;

/// Derived schedule facts for one plant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantSchedule {
    pub plant: Plant,
    pub next_watering: NaiveDate,
    /// Zero when due today, negative when overdue
    pub days_until_watering: i64,
    pub needs_water: bool,
}

/// Day of month (1..=31) -> names of plants due that day, in plant order
pub type WateringSchedule = BTreeMap<u32, Vec<String>>;

/// Result of projecting a set of plants onto a month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WateringProjection {
    pub reference_date: NaiveDate,
    pub window_days: u32,
    pub plants: Vec<PlantSchedule>,
    pub schedule: WateringSchedule,
}

/// First due date after the last watering.
///
/// Saturates at the end of chrono's date range instead of panicking.
pub fn next_watering_date(plant: &Plant) -> NaiveDate {
    plant
        .last_watered
        .checked_add_days(Days::new(u64::from(plant.watering_frequency)))
        .unwrap_or(NaiveDate::MAX)
}

/// Compute the next watering date and due status of a plant
pub fn schedule_for(plant: &Plant, reference_date: NaiveDate) -> PlantSchedule {
    let next_watering = next_watering_date(plant);
    let days_until_watering = next_watering.signed_duration_since(reference_date).num_days();

    PlantSchedule {
        plant: plant.clone(),
        next_watering,
        days_until_watering,
        needs_water: days_until_watering <= 0,
    }
}

/// Every watering date generated for a plant within the lookahead window,
/// starting at its next due date. Dates are not filtered by month.
pub fn upcoming_waterings(plant: &Plant, window_days: u32) -> Vec<NaiveDate> {
    let frequency = plant.watering_frequency;
    if frequency == 0 {
        return Vec::new();
    }

    let iterations = u64::from(window_days / frequency) + 1;
    let step = Days::new(u64::from(frequency));

    let mut dates = Vec::new();
    let mut current = plant.last_watered.checked_add_days(step);
    for _ in 0..iterations {
        let Some(date) = current else {
            break;
        };
        dates.push(date);
        current = date.checked_add_days(step);
    }
    dates
}

/// Bucket each plant's upcoming waterings by day of the reference month
pub fn build_watering_schedule(
    plants: &[Plant],
    reference_date: NaiveDate,
    window_days: u32,
) -> WateringSchedule {
    let mut schedule = WateringSchedule::new();

    for plant in plants {
        for date in upcoming_waterings(plant, window_days) {
            if date.month() == reference_date.month() && date.year() == reference_date.year() {
                schedule.entry(date.day()).or_default().push(plant.name.clone());
            }
        }
    }

    schedule
}

/// Project all plants against a reference date
pub fn project(plants: &[Plant], reference_date: NaiveDate, window_days: u32) -> WateringProjection {
    WateringProjection {
        reference_date,
        window_days,
        plants: plants.iter().map(|p| schedule_for(p, reference_date)).collect(),
        schedule: build_watering_schedule(plants, reference_date, window_days),
    }
}
