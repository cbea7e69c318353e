use chrono::{DateTime, TimeZone, Utc};
use maud::{Markup, html};

use super::states::render_message;
use crate::model::{
    CalendarLinks, DisplayMatch, TeamFilter, encode_uri_component, generate_calendar_links,
    level_class,
};

pub const CLUB_DISPLAY_NAME: &str = "KBBC Oostkamp";
const CLUB_SITE: &str = "https://kbbco.be";
const OPPONENT_DETAIL_URL: &str = "https://vblweb.wisseq.eu/Home/TeamDetail?teamguid=";

/// Groups matches sharing a date and start time, keeping first-seen order.
#[must_use]
pub fn group_games_by_date<'a>(games: &[&'a DisplayMatch]) -> Vec<(String, Vec<&'a DisplayMatch>)> {
    let mut grouped: Vec<(String, Vec<&DisplayMatch>)> = Vec::new();
    for game in games {
        let key = game.date_time_label();
        match grouped.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(*game),
            None => grouped.push((key, vec![*game])),
        }
    }
    grouped
}

pub fn render_week_games<Tz: TimeZone>(
    games: &[DisplayMatch],
    filter: &TeamFilter,
    year: i32,
    tz: &Tz,
    generated_at: DateTime<Utc>,
) -> Markup {
    if games.is_empty() {
        return render_message(
            "Geen wedstrijden deze week",
            "Er zijn geen wedstrijden gepland voor deze week.",
        );
    }

    let visible: Vec<&DisplayMatch> = filter.visible(games).collect();
    if visible.is_empty() {
        return render_message(
            "Geen wedstrijden voor geselecteerde teams",
            "Er zijn geen wedstrijden voor de geselecteerde teams deze week.",
        );
    }

    html! {
        @for (date_time, day_games) in group_games_by_date(&visible) {
            (render_game_card(&date_time, &day_games, year, tz, generated_at))
        }
    }
}

fn render_game_card<Tz: TimeZone>(
    date_time: &str,
    games: &[&DisplayMatch],
    year: i32,
    tz: &Tz,
    generated_at: DateTime<Utc>,
) -> Markup {
    let cup = games.iter().find(|g| g.is_cup);
    html! {
        div class="game-card" {
            div class="game-date-header" {
                span { (date_time) }
                @if let Some(cup) = cup {
                    span class="competition-badge" { (cup.competition) }
                }
            }
            div class="game-content" {
                @for (index, game) in games.iter().enumerate() {
                    @if index > 0 {
                        hr class="game-divider";
                    }
                    (render_matchup(game, generate_calendar_links(game, year, tz, generated_at).as_ref()))
                }
            }
        }
    }
}

#[must_use]
pub fn render_matchup(game: &DisplayMatch, calendar: Option<&CalendarLinks>) -> Markup {
    let won = game.our_team_won();
    html! {
        div class="team-matchup" {
            (render_team_section(game, true, won))
            div class="vs-section" {
                @if calendar.is_some() {
                    div class="vs-divider clickable" title="Voeg toe aan kalender" { "VS" }
                } @else {
                    div class="vs-divider" { "VS" }
                }
                div class="game-status" {
                    @if game.has_result { "Gespeeld" } @else { "Te spelen" }
                }
                @if let Some(links) = calendar {
                    div class="calendar-dropdown" {
                        a href=(links.google) target="_blank" rel="noopener" { "Google Calendar" }
                        a href=(links.outlook) target="_blank" rel="noopener" { "Outlook" }
                        a href=(links.ical) download="kbbco-game.ics" { "Apple Calendar" }
                    }
                }
            }
            (render_team_section(game, false, won))
        }
    }
}

fn render_team_section(game: &DisplayMatch, home_side: bool, our_team_won: bool) -> Markup {
    let ours = game.is_home == home_side;
    let score = match (game.has_result, home_side) {
        (false, _) => "",
        (true, true) => game.score_home.as_str(),
        (true, false) => game.score_away.as_str(),
    };
    let side = if home_side { "home" } else { "away" };
    let mut class = format!("team-section {side}");
    if ours {
        class.push_str(" kbbc-team");
        if our_team_won {
            class.push_str(" kbbc-winner");
        }
    }
    let team_page = format!("{CLUB_SITE}/{}/", game.team_info.link);

    html! {
        div class=(class) {
            div class="team-name" {
                @if ours {
                    a href=(team_page) { (CLUB_DISPLAY_NAME) }
                    span class=(format!("team-level-inline {}", level_class(&game.team_info.display))) {
                        a href=(team_page) { (game.team_info.display) }
                    }
                } @else {
                    a href=(format!("{OPPONENT_DETAIL_URL}{}", encode_uri_component(&game.opponent_guid))) target="_blank" rel="noopener" {
                        (game.opponent)
                    }
                }
            }
            @if !score.is_empty() {
                div class="team-score" { (score) }
            }
        }
    }
}
