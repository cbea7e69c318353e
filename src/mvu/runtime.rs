use chrono::TimeZone;

use super::error::AppError;
use crate::mvu::widget::{Deps, Msg, WidgetModel, run_effect, update};

/// Drives one widget request to completion.
///
/// `init_msg` yields the first effects; each effect's reply is fed back
/// through `update` until no effect is left, leaving the fragment in
/// `model.markup`. A failed effect ends the request: the error stays on
/// `model.error` for the error view and is returned.
///
/// # Errors
///
/// Returns the `AppError` of the effect that failed, e.g. a schedule fetch.
pub async fn run_widget<Tz: TimeZone>(
    model: &mut WidgetModel,
    init_msg: Msg,
    deps: &Deps<'_, Tz>,
) -> Result<(), AppError> {
    let mut pending = update(model, init_msg);
    while let Some(effect) = pending.pop() {
        match run_effect(effect, model, deps).await {
            Msg::Failed(e) => {
                model.error = Some(e.clone());
                return Err(e);
            }
            reply => pending.extend(update(model, reply)),
        }
    }
    Ok(())
}
