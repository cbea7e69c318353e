use chrono::{Datelike, Duration, NaiveDate};

/// ISO 8601 week number of `date`.
///
/// Moves to the Thursday of the Monday-starting week and counts whole weeks
/// since the first Thursday of that Thursday's year.
#[must_use]
pub fn iso_week_of(date: NaiveDate) -> u32 {
    let thursday = thursday_of_week(date);
    let Some(first_thursday) = first_thursday_of(thursday.year()) else {
        // NaiveDate only fails at the edges of its range
        return date.iso_week().week();
    };
    let days = (thursday - first_thursday).num_days();
    u32::try_from(days / 7 + 1).unwrap_or(1)
}

/// Monday of ISO week `week` in `year`.
///
/// Returns `None` for week 0 or dates chrono cannot represent.
#[must_use]
pub fn monday_of_iso_week(week: u32, year: i32) -> Option<NaiveDate> {
    if week == 0 {
        return None;
    }
    let monday_of_week_one = first_thursday_of(year)? - Duration::days(3);
    monday_of_week_one.checked_add_signed(Duration::weeks(i64::from(week) - 1))
}

/// Number of ISO weeks in `year`: 53 when December 28th falls in week 53.
#[must_use]
pub fn weeks_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 28).map_or(52, iso_week_of)
}

fn thursday_of_week(date: NaiveDate) -> NaiveDate {
    let from_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(from_monday) + Duration::days(3)
}

// January 4th is always in week 1.
fn first_thursday_of(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 4).map(thursday_of_week)
}
