use crate::calendar::Calendar;
use crate::constants::MONTHS_PER_YEAR;
use crate::options::PlannerOptions;
use crate::types::*;

/// Calculate page counts for a planner without rendering it
pub fn calculate_statistics(
    options: &PlannerOptions,
    calendar: &dyn Calendar,
) -> Result<PlannerStatistics> {
    options.validate()?;

    let years = options.num_years;
    let months = years * MONTHS_PER_YEAR;

    let mut days = 0;
    for offset in 0..years {
        let year = options.start_year + offset as i32;
        for month in 1..=MONTHS_PER_YEAR as u32 {
            days += calendar.days_in_month(year, month)? as usize;
        }
    }

    // Main page plus every year, month and day
    let total_pages = 1 + years + months + days;

    Ok(PlannerStatistics {
        years,
        months,
        days,
        total_pages,
    })
}
