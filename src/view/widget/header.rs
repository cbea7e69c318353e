use maud::{Markup, PreEscaped, html};

use super::{WIDGET_TARGET, WidgetLink};
use crate::model::Navigator;
use crate::mvu::widget::Command;

const PREV_ICON: &str = r#"<svg width="40" height="40" viewBox="0 0 24 24" fill="currentColor"><path d="M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z"/></svg>"#;
const NEXT_ICON: &str = r#"<svg width="40" height="40" viewBox="0 0 24 24" fill="currentColor"><path d="M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z"/></svg>"#;

#[must_use]
pub fn render_header(navigator: &Navigator, year: i32, link: &WidgetLink) -> Markup {
    let week = Some(navigator.display_week());
    html! {
        div class="kbbco-games-header" {
            div class="week-navigation" {
                button class="nav-btn prev-btn" aria-label="Vorige week"
                    hx-get=(link.url(week, Some(&Command::PrevWeek)))
                    hx-target=(WIDGET_TARGET) hx-swap="innerHTML" {
                    (PreEscaped(PREV_ICON))
                }
                button class="nav-btn next-btn" aria-label="Volgende week"
                    hx-get=(link.url(week, Some(&Command::NextWeek)))
                    hx-target=(WIDGET_TARGET) hx-swap="innerHTML" {
                    (PreEscaped(NEXT_ICON))
                }
            }
            h3 id="week-title" class="week-title" { (navigator.title(year)) }
        }
    }
}
