pub mod filter;
pub mod games;
pub mod header;
pub mod states;

pub use filter::*;
pub use games::*;
pub use header::*;
pub use states::*;

use chrono::{Datelike, TimeZone};
use maud::{Markup, html};

use crate::model::encode_uri_component;
use crate::mvu::widget::{Command, Deps, WidgetModel};

pub const WIDGET_PATH: &str = "games/widget";
pub const WIDGET_TARGET: &str = "#kbbco-games-container";

/// Builds the htmx URLs the widget's controls call back on.
#[derive(Debug, Clone)]
pub struct WidgetLink {
    nonce: String,
    show_weeks: u32,
    theme: String,
}

impl WidgetLink {
    #[must_use]
    pub fn new(nonce: &str, show_weeks: u32, theme: &str) -> Self {
        Self {
            nonce: nonce.to_string(),
            show_weeks,
            theme: theme.to_string(),
        }
    }

    #[must_use]
    pub fn for_model(model: &WidgetModel, nonce: &str) -> Self {
        Self::new(nonce, model.show_weeks, &model.theme)
    }

    #[must_use]
    pub fn url(&self, week: Option<u32>, command: Option<&Command>) -> String {
        let mut url = format!(
            "{WIDGET_PATH}?nonce={}&show_weeks={}&theme={}",
            encode_uri_component(&self.nonce),
            self.show_weeks,
            encode_uri_component(&self.theme)
        );
        if let Some(week) = week {
            url.push_str(&format!("&week={week}"));
        }
        if let Some(command) = command {
            url.push_str("&action=");
            url.push_str(command.action());
            if let Command::ToggleTeam(team) = command {
                url.push_str("&team=");
                url.push_str(&encode_uri_component(team));
            }
        }
        url
    }
}

/// Inner markup of the widget container for the model's display week.
pub fn render_widget<Tz: TimeZone>(model: &WidgetModel, deps: &Deps<'_, Tz>) -> Markup {
    let link = WidgetLink::for_model(model, deps.nonce);
    let Some(schedule) = model.schedule.as_ref() else {
        return render_error(model, deps.nonce);
    };

    let week = model.navigator.display_week();
    let year = model.today.year();

    html! {
        (render_header(&model.navigator, year, &link))
        @if !schedule.is_empty() {
            (render_team_filter(&model.filter, week, &link))
        }
        div id="games-content" class="games-content" {
            @if schedule.is_empty() {
                (render_message(
                    "Geen wedstrijden beschikbaar",
                    "Er zijn momenteel geen wedstrijden beschikbaar."
                ))
            } @else {
                div id=(format!("week-{week}")) class="week-games active" {
                    (render_week_games(schedule.week(week), &model.filter, year, deps.tz, deps.generated_at))
                }
            }
        }
    }
}
