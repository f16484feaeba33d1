//! Conversions from domain values to the `shared` DTOs.
//!
//! Human-readable date strings are produced here and nowhere else.

use chrono::{Datelike, NaiveDate};
use shared::{
    CalendarCell, CalendarWeek as SharedCalendarWeek, DashboardResponse, PlantView,
};

use crate::domain::calendar::{CalendarService, CalendarWeek};
use crate::domain::models::plant::ISO_DATE_FORMAT;
use crate::domain::watering_schedule::{PlantSchedule, WateringProjection};

/// Display format, e.g. "June 08, 2024"
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

pub struct PlantMapper;

impl PlantMapper {
    pub fn format_display_date(date: NaiveDate) -> String {
        date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn format_iso_date(date: NaiveDate) -> String {
        date.format(ISO_DATE_FORMAT).to_string()
    }

    pub fn to_view(schedule: PlantSchedule) -> PlantView {
        let PlantSchedule {
            plant,
            next_watering,
            days_until_watering,
            needs_water,
        } = schedule;

        PlantView {
            id: plant.id,
            name: plant.name,
            species: plant.species,
            watering_frequency: plant.watering_frequency,
            last_watered: Self::format_display_date(plant.last_watered),
            last_watered_iso: Self::format_iso_date(plant.last_watered),
            next_watering: Self::format_iso_date(next_watering),
            next_watering_str: Self::format_display_date(next_watering),
            days_until_watering,
            needs_water,
        }
    }

    fn to_week_dto(week: &CalendarWeek, projection: &WateringProjection) -> SharedCalendarWeek {
        let reference = projection.reference_date;
        let days = week
            .iter()
            .map(|date| {
                let in_current_month =
                    date.month() == reference.month() && date.year() == reference.year();
                let plants = if in_current_month {
                    projection.schedule.get(&date.day()).cloned().unwrap_or_default()
                } else {
                    Vec::new()
                };
                CalendarCell {
                    date: Self::format_iso_date(*date),
                    day: date.day(),
                    in_current_month,
                    is_today: *date == reference,
                    plants,
                }
            })
            .collect();

        SharedCalendarWeek { days }
    }

    pub fn to_dashboard(
        projection: WateringProjection,
        weeks: &[CalendarWeek],
        calendar: &CalendarService,
    ) -> DashboardResponse {
        let reference = projection.reference_date;
        let weeks = weeks
            .iter()
            .map(|week| Self::to_week_dto(week, &projection))
            .collect();

        DashboardResponse {
            weeks,
            today: reference.day(),
            current_month_name: calendar.month_name(reference),
            current_month: reference.month(),
            current_year: reference.year(),
            lookahead_days: projection.window_days,
            watering_schedule: projection.schedule,
            plants: projection.plants.into_iter().map(Self::to_view).collect(),
        }
    }
}
