//! Calendar arithmetic and date strings
//!
//! The tree builder and page composers ask a [`Calendar`] for day counts,
//! weekdays and display strings instead of doing date math themselves.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::types::{PlannerError, Result};

/// Display forms of a date used on planner pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// "2021"
    Year,
    /// "Jan 2021"
    MonthTitle,
    /// "Jan"
    MonthLabel,
    /// "January 01 2021"
    DayTitle,
    /// "01"
    DayLabel,
}

impl DateFormat {
    /// strftime pattern for this format
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Year => "%Y",
            DateFormat::MonthTitle => "%b %Y",
            DateFormat::MonthLabel => "%b",
            DateFormat::DayTitle => "%B %d %Y",
            DateFormat::DayLabel => "%d",
        }
    }
}

/// Calendar arithmetic provider
pub trait Calendar {
    /// Number of days in `month` (1-12) of `year`
    fn days_in_month(&self, year: i32, month: u32) -> Result<u32>;

    fn weekday_of(&self, date: NaiveDate) -> Weekday;

    fn format(&self, date: NaiveDate, format: DateFormat) -> String;

    /// Abbreviated weekday name, or only its first letter
    fn weekday_name(&self, weekday: Weekday, initial_only: bool) -> String;

    /// Every day of a month, in order
    fn days_of_month(&self, year: i32, month: u32) -> Result<Vec<NaiveDate>> {
        let first = ymd(year, month, 1)?;
        let count = self.days_in_month(year, month)?;
        Ok(first.iter_days().take(count as usize).collect())
    }
}

/// Gregorian calendar backed by `chrono`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoCalendar;

impl Calendar for ChronoCalendar {
    fn days_in_month(&self, year: i32, month: u32) -> Result<u32> {
        let first = ymd(year, month, 1)?;
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or_else(|| out_of_range(year, month, 1))?;
        Ok(next.signed_duration_since(first).num_days() as u32)
    }

    fn weekday_of(&self, date: NaiveDate) -> Weekday {
        date.weekday()
    }

    fn format(&self, date: NaiveDate, format: DateFormat) -> String {
        date.format(format.pattern()).to_string()
    }

    fn weekday_name(&self, weekday: Weekday, initial_only: bool) -> String {
        let name = weekday.to_string();
        if initial_only {
            name.chars().take(1).collect()
        } else {
            name
        }
    }
}

/// Build a date, reporting dates chrono cannot represent as a config error.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| out_of_range(year, month, day))
}

fn out_of_range(year: i32, month: u32, day: u32) -> PlannerError {
    PlannerError::Config(format!("Date {}-{:02}-{:02} is out of range", year, month, day))
}

/// Number of blank cells before `first` in a week row whose first column is
/// `first_day_of_week`.
pub fn leading_skip(
    calendar: &dyn Calendar,
    first: NaiveDate,
    first_day_of_week: Weekday,
) -> usize {
    let weekday = calendar.weekday_of(first).num_days_from_sunday();
    let start = first_day_of_week.num_days_from_sunday();
    ((weekday + 7 - start) % 7) as usize
}

/// The seven weekdays in column order, starting at `first_day_of_week`
pub fn week_columns(first_day_of_week: Weekday) -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(first_day_of_week), |day| Some(day.succ())).take(7)
}
