use actix_web::cookie::Cookie;
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use log::{error, warn};
use std::collections::HashMap;

use crate::controller::games::GamesContext;
use crate::model::{CookiePreferences, FILTER_PREFERENCE_KEY};
use crate::mvu::runtime::run_widget;
use crate::mvu::widget::{Deps, decode_request_to_model};
use crate::view::widget::{render_error, render_widget};

/// `GET /games/widget`: renders the widget for one week, applying the
/// requested action first.
pub async fn widget(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    ctx: Data<GamesContext>,
) -> impl Responder {
    let nonce = query.get("nonce").map(String::as_str).unwrap_or("");
    if !ctx.nonce.verify(nonce, Utc::now()) {
        warn!("Rejected widget request with an invalid nonce");
        return HttpResponse::Forbidden()
            .content_type("text/html")
            .body("Invalid security token");
    }

    let preferences = CookiePreferences::new(
        req.cookie(FILTER_PREFERENCE_KEY)
            .map(|c| c.value().to_string()),
    );
    let today = Utc::now().with_timezone(&ctx.tz).date_naive();

    let (mut model, init_msg) = match decode_request_to_model(&*query, today, &preferences) {
        Ok(decoded) => decoded,
        Err(e) => {
            return HttpResponse::BadRequest()
                .content_type("text/html")
                .body(e.to_string());
        }
    };

    let deps = Deps {
        cache: ctx.cache.as_ref(),
        source: ctx.source.as_ref(),
        preferences: &preferences,
        cache_ttl_seconds: ctx.cache_ttl_seconds,
        tz: &ctx.tz,
        generated_at: Utc::now(),
        nonce,
    };

    let markup = match run_widget(&mut model, init_msg, &deps).await {
        Ok(()) => model
            .markup
            .take()
            .unwrap_or_else(|| render_widget(&model, &deps)),
        Err(e) => {
            error!("KBBCO Games: failed to load games: {e}");
            render_error(&model, nonce)
        }
    };

    let mut response = HttpResponse::Ok();
    if let Some(value) = preferences.take_outgoing() {
        response.cookie(
            Cookie::build(FILTER_PREFERENCE_KEY, value)
                .path("/")
                .permanent()
                .finish(),
        );
    }
    response
        .content_type("text/html")
        .body(markup.into_string())
}
