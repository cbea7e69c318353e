use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::view::widget::WidgetLink;

/// htmx request config for the widget; the swapped-in controls inherit it.
pub const WIDGET_REQUEST_CONFIG: &str = r#"{"timeout":30000}"#;

/// Page embedding the games widget. `show_weeks` and `theme` are carried
/// through to the widget untouched.
#[must_use]
pub fn render_index_template(title: &str, nonce: &str, show_weeks: u32, theme: &str) -> Markup {
    let link = WidgetLink::new(nonce, show_weeks, theme);
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/kbbco-games.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            div id="kbbco-games-container" class="kbbco-games-widget" data-theme=(theme)
                data-show-weeks=(show_weeks)
                hx-get=(link.url(None, None)) hx-trigger="load" hx-swap="innerHTML"
                hx-request=(WIDGET_REQUEST_CONFIG) {
                div class="loading-spinner" {
                    div class="spinner" {}
                    p { "Wedstrijden laden..." }
                }
            }
        }
    }
}
