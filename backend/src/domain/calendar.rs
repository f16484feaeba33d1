//! Calendar domain logic for the plant tracker.
//!
//! Builds the month grid the dashboard renders. Weeks start on Monday and
//! always hold seven consecutive dates, borrowing leading and trailing days
//! from the neighbouring months.

use chrono::{Datelike, Days, Months, NaiveDate};

/// One displayed week, Monday first
pub type CalendarWeek = [NaiveDate; 7];

/// Calendar service that handles month grid calculations
#[derive(Clone, Debug, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// English month name of `date`, e.g. "June"
    pub fn month_name(&self, date: NaiveDate) -> String {
        date.format("%B").to_string()
    }

    /// First and last day of the month containing `date`
    fn month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let first = date.with_day(1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        Some((first, last))
    }

    /// All weeks needed to display the month containing `reference_date`.
    ///
    /// The first week starts on the Monday on or before the 1st; the last week
    /// ends on the Sunday on or after the final day of the month.
    pub fn month_weeks(&self, reference_date: NaiveDate) -> Vec<CalendarWeek> {
        let Some((first, last)) = Self::month_bounds(reference_date) else {
            return Vec::new();
        };

        let lead = u64::from(first.weekday().num_days_from_monday());
        let trail = u64::from(6 - last.weekday().num_days_from_monday());
        let (Some(grid_start), Some(grid_end)) = (
            first.checked_sub_days(Days::new(lead)),
            last.checked_add_days(Days::new(trail)),
        ) else {
            return Vec::new();
        };

        let mut weeks = Vec::new();
        let mut week_start = grid_start;
        while week_start <= grid_end {
            let mut week = [week_start; 7];
            for (offset, slot) in week.iter_mut().enumerate() {
                *slot = week_start + Days::new(offset as u64);
            }
            weeks.push(week);

            match week_start.checked_add_days(Days::new(7)) {
                Some(next) => week_start = next,
                None => break,
            }
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(date(2025, 1, 31)), "January");
        assert_eq!(service.month_name(date(2024, 6, 15)), "June");
        assert_eq!(service.month_name(date(2024, 12, 1)), "December");
    }

    #[test]
    fn test_leap_february_ends_on_the_29th() {
        let service = CalendarService::new();
        let weeks = service.month_weeks(date(2024, 2, 10));

        // Feb 1st 2024 is a Thursday, Feb 29th a Thursday
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], date(2024, 1, 29));
        assert_eq!(weeks[4][3], date(2024, 2, 29));
        assert_eq!(weeks[4][6], date(2024, 3, 3));
    }

    #[test]
    fn test_june_2024_grid() {
        let service = CalendarService::new();
        let weeks = service.month_weeks(date(2024, 6, 15));

        // June 1st 2024 is a Saturday, June 30th a Sunday
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], date(2024, 5, 27));
        assert_eq!(weeks[0][5], date(2024, 6, 1));
        assert_eq!(weeks[4][6], date(2024, 6, 30));
    }

    #[test]
    fn test_february_2021_fits_four_weeks() {
        let service = CalendarService::new();
        let weeks = service.month_weeks(date(2021, 2, 10));

        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], date(2021, 2, 1));
        assert_eq!(weeks[3][6], date(2021, 2, 28));
    }

    #[test]
    fn test_trailing_days_from_next_month() {
        let service = CalendarService::new();
        let weeks = service.month_weeks(date(2024, 7, 1));

        // July 31st 2024 is a Wednesday
        let last_week = weeks.last().unwrap();
        assert_eq!(last_week[2], date(2024, 7, 31));
        assert_eq!(last_week[6], date(2024, 8, 4));
    }

    #[test]
    fn test_weeks_are_consecutive_and_monday_first() {
        let service = CalendarService::new();

        for month in 1..=12 {
            let reference = date(2025, month, 1);
            let weeks = service.month_weeks(reference);
            let days: Vec<NaiveDate> = weeks.iter().flatten().copied().collect();

            assert_eq!(days.len() % 7, 0);
            for week in &weeks {
                assert_eq!(week[0].weekday(), Weekday::Mon);
            }
            for pair in days.windows(2) {
                assert_eq!(pair[1], pair[0] + Days::new(1));
            }

            let next_month = if month == 12 { date(2026, 1, 1) } else { date(2025, month + 1, 1) };
            let in_month = days.iter().filter(|d| d.month() == month).count() as i64;
            assert_eq!(in_month, (next_month - reference).num_days());
        }
    }
}
