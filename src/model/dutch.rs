use chrono::{Datelike, Duration, NaiveDate};

use super::week::monday_of_iso_week;

pub const MONTH_NAMES: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

pub const DAY_NAMES: [&str; 7] = [
    "Maandag",
    "Dinsdag",
    "Woensdag",
    "Donderdag",
    "Vrijdag",
    "Zaterdag",
    "Zondag",
];

pub const THIS_WEEK_TITLE: &str = "Wedstrijden voor deze week";

#[must_use]
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Zero-based month index for a Dutch month name, ignoring case.
#[must_use]
pub fn month_index(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .and_then(|i| u32::try_from(i).ok())
}

/// `"Zaterdag 12 oktober"`
#[must_use]
pub fn format_match_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        DAY_NAMES[date.weekday().num_days_from_monday() as usize],
        date.day(),
        month_name(date)
    )
}

/// Title shown above the week being displayed.
#[must_use]
pub fn week_span_title(week: u32, current_week: u32, year: i32) -> String {
    if week == current_week {
        return THIS_WEEK_TITLE.to_string();
    }
    span_title(week, year).unwrap_or_else(|| format!("Week {week}"))
}

fn span_title(week: u32, year: i32) -> Option<String> {
    let monday = monday_of_iso_week(week, year)?;
    let sunday = monday.checked_add_signed(Duration::days(6))?;

    if monday.year() != sunday.year() {
        return Some(format!(
            "Van maandag {} {} {} tem zondag {} {} {}",
            monday.day(),
            month_name(monday),
            monday.year(),
            sunday.day(),
            month_name(sunday),
            sunday.year()
        ));
    }

    let start = if monday.month() == sunday.month() {
        monday.day().to_string()
    } else {
        format!("{} {}", monday.day(), month_name(monday))
    };
    Some(format!(
        "Van maandag {start} tem zondag {} {}",
        sunday.day(),
        month_name(sunday)
    ))
}
