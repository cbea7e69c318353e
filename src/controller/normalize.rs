use chrono::NaiveDate;
use log::debug;

use crate::CLUB_NAME;
use crate::model::{DisplayMatch, RawMatch, TeamInfo, WeeklySchedule, format_match_date, iso_week_of};

const CUP_MARKER: &str = "Beker";
const DATE_FORMATS: [&str; 4] = ["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];

#[must_use]
pub fn parse_match_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
}

/// Turns an API record into a display record; `None` when its date is unusable.
#[must_use]
pub fn normalize_match(raw: &RawMatch) -> Option<DisplayMatch> {
    let game_date = parse_match_date(&raw.date)?;

    let is_home = raw.home_name.contains(CLUB_NAME);
    let (our_team, opponent, opponent_guid) = if is_home {
        (&raw.home_name, &raw.away_name, &raw.away_guid)
    } else {
        (&raw.away_name, &raw.home_name, &raw.home_guid)
    };

    let team_info = TeamInfo::resolve(our_team);
    let opponent = clean_team_name(opponent, &team_info.original_level);
    let (score_home, score_away) = parse_result(&raw.result).unwrap_or_default();
    let has_result = !score_home.is_empty() && !score_away.is_empty();

    Some(DisplayMatch {
        week: iso_week_of(game_date),
        date: format_match_date(game_date),
        time: raw.start_time.trim().to_string(),
        is_cup: raw.competition.contains(CUP_MARKER),
        competition: raw.competition.clone(),
        team_info,
        opponent,
        opponent_guid: opponent_guid.clone(),
        is_home,
        score_home,
        score_away,
        has_result,
    })
}

/// Sorts by the API's date code and buckets by ISO week.
#[must_use]
pub fn build_weekly_schedule(mut raws: Vec<RawMatch>) -> WeeklySchedule {
    raws.sort_by_key(|r| r.date_code);
    raws.iter()
        .filter_map(|raw| {
            let game = normalize_match(raw);
            if game.is_none() {
                debug!(
                    "Dropping match {} vs {}: unreadable date '{}'",
                    raw.home_name, raw.away_name, raw.date
                );
            }
            game
        })
        .collect()
}

// "78 - 65" -> ("78", "65")
fn parse_result(result: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = result.split('-').map(str::trim).collect();
    match parts.as_slice() {
        [home, away] if !home.is_empty() && !away.is_empty() => {
            Some(((*home).to_string(), (*away).to_string()))
        }
        _ => None,
    }
}

fn clean_team_name(team_name: &str, level: &str) -> String {
    if level.is_empty() {
        team_name.trim().to_string()
    } else {
        team_name.replace(level, "").trim().to_string()
    }
}
