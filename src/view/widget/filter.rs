use maud::{Markup, html};

use super::{WIDGET_TARGET, WidgetLink};
use crate::model::{TeamFilter, level_class};
use crate::mvu::widget::Command;

#[must_use]
pub fn render_team_filter(filter: &TeamFilter, week: u32, link: &WidgetLink) -> Markup {
    let week = Some(week);
    html! {
        details class="team-filter" {
            summary class="filter-toggle" {
                span class="filter-title" { "Filter teams" }
                span class="filter-count" { (filter.count_label()) }
            }
            div id="team-filter-content" class="team-filter-content" {
                div class="filter-actions" {
                    @for (label, command) in [
                        ("Alle", Command::SelectAll),
                        ("Seniors", Command::SelectSeniors),
                        ("Jeugd", Command::SelectYouth),
                        ("Geen", Command::ClearAll),
                    ] {
                        button class="filter-btn"
                            hx-get=(link.url(week, Some(&command)))
                            hx-target=(WIDGET_TARGET) hx-swap="innerHTML" { (label) }
                    }
                }
                div id="team-checkboxes" class="team-checkboxes" {
                    @for team in filter.sorted_available() {
                        label class=(format!("team-checkbox {}", level_class(team))) {
                            input type="checkbox" checked[filter.is_selected(team)]
                                hx-get=(link.url(week, Some(&Command::ToggleTeam(team.to_string()))))
                                hx-trigger="change" hx-target=(WIDGET_TARGET) hx-swap="innerHTML";
                            span class="checkbox-custom" {}
                            span class="team-label" { (team) }
                        }
                    }
                }
            }
        }
    }
}
