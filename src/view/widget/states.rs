use maud::{Markup, html};

use super::{WIDGET_TARGET, WidgetLink};
use crate::mvu::widget::WidgetModel;

pub const LOAD_ERROR_MESSAGE: &str = "Er is een fout opgetreden bij het laden van de wedstrijden.";

#[must_use]
pub fn render_message(heading: &str, text: &str) -> Markup {
    html! {
        div class="no-games-message" {
            h3 { (heading) }
            p { (text) }
        }
    }
}

/// Error state with a manual retry. The cause is only logged, visitors see
/// the generic message.
#[must_use]
pub fn render_error(model: &WidgetModel, nonce: &str) -> Markup {
    let link = WidgetLink::for_model(model, nonce);
    let week = (!model.first_load).then(|| model.navigator.display_week());
    html! {
        div id="games-content" class="games-content" {}
        div id="error-message" class="error-message" {
            p { (LOAD_ERROR_MESSAGE) }
            button class="retry-btn"
                hx-get=(link.url(week, None))
                hx-target=(WIDGET_TARGET) hx-swap="innerHTML" { "Opnieuw proberen" }
        }
    }
}
