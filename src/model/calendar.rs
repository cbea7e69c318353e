use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;

use super::display::DisplayMatch;
use super::dutch::month_index;
use super::uri::encode_uri_component;

const GAME_DURATION_HOURS: i64 = 2;
const CLUB_EVENT_NAME: &str = "KBBCO Oostkamp";
const HOME_LOCATION: &str = "Sporthal KBBCO, Oostkamp";

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}) (\w+)").expect("date pattern is valid"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\.(\d{2})").expect("time pattern is valid"));

/// Add-to-calendar targets for one upcoming match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLinks {
    pub google: String,
    pub outlook: String,
    pub ical: String,
    pub ics: String,
}

/// Builds calendar links for an unplayed match.
///
/// The date label carries no year, so `year` is assumed. The start is read
/// as wall-clock time in `tz`. Returns `None` for played matches and for
/// anything that does not parse.
pub fn generate_calendar_links<Tz: TimeZone>(
    game: &DisplayMatch,
    year: i32,
    tz: &Tz,
    generated_at: DateTime<Utc>,
) -> Option<CalendarLinks> {
    if game.has_result || game.date.is_empty() || game.time.is_empty() {
        return None;
    }

    let start = parse_start(&game.date, &game.time, year, tz)?;
    let end = start + Duration::hours(GAME_DURATION_HOURS);
    let start_stamp = calendar_stamp(start);
    let end_stamp = calendar_stamp(end);

    let (home, away) = if game.is_home {
        (CLUB_EVENT_NAME, game.opponent.as_str())
    } else {
        (game.opponent.as_str(), CLUB_EVENT_NAME)
    };
    let title = format!("{home} vs {away}");
    let details = format!("KBBCO {} team", game.team_info.display);
    let location = if game.is_home { HOME_LOCATION } else { "" };

    let google = format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={start_stamp}/{end_stamp}&details={}&location={}",
        encode_uri_component(&title),
        encode_uri_component(&details),
        encode_uri_component(location)
    );
    let outlook = format!(
        "https://outlook.live.com/calendar/0/deeplink/compose?subject={}&startdt={start_stamp}&enddt={end_stamp}&body={}&location={}",
        encode_uri_component(&title),
        encode_uri_component(&details),
        encode_uri_component(location)
    );

    let uid = format!(
        "kbbco-{}-{}-{}",
        game.date.split_whitespace().collect::<String>(),
        game.time.replacen('.', "", 1),
        generated_at.timestamp_millis()
    );
    let ics = format!(
        "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:KBBCO Games\nBEGIN:VEVENT\nUID:{uid}\nDTSTART:{start_stamp}\nDTEND:{end_stamp}\nSUMMARY:{title}\nDESCRIPTION:{details}\nLOCATION:{location}\nEND:VEVENT\nEND:VCALENDAR"
    );
    let ical = format!(
        "data:text/calendar;charset=utf8,{}",
        encode_uri_component(&ics)
    );

    Some(CalendarLinks {
        google,
        outlook,
        ical,
        ics,
    })
}

fn parse_start<Tz: TimeZone>(date: &str, time: &str, year: i32, tz: &Tz) -> Option<DateTime<Utc>> {
    let date_caps = DATE_RE.captures(date)?;
    let day: u32 = date_caps[1].parse().ok()?;
    let month = month_index(&date_caps[2])? + 1;

    let time_caps = TIME_RE.captures(time)?;
    let hours: u32 = time_caps[1].parse().ok()?;
    let minutes: u32 = time_caps[2].parse().ok()?;

    let local = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hours, minutes, 0)?;
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

// 20241012T180000Z
fn calendar_stamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}
