use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono_tz::Tz;
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use crate::SCHEDULE_CACHE_KEY;
use crate::controller::cache::ScheduleCache;
use crate::controller::client::MatchSource;
use crate::controller::nonce::NonceIssuer;
use crate::controller::normalize::build_weekly_schedule;
use crate::model::{GamesResponse, WeeklySchedule};
use crate::mvu::error::AppError;

/// Shared collaborators of the request handlers.
#[derive(Clone)]
pub struct GamesContext {
    pub cache: Arc<dyn ScheduleCache>,
    pub source: Arc<dyn MatchSource>,
    pub nonce: NonceIssuer,
    pub cache_ttl_seconds: u64,
    /// Zone of the league's wall-clock match times and of "today".
    pub tz: Tz,
}

impl GamesContext {
    /// Drops the cached schedule, e.g. on start-up and shutdown.
    pub async fn invalidate(&self) {
        self.cache.delete(SCHEDULE_CACHE_KEY).await;
    }
}

/// Cached schedule if still fresh, otherwise fetch, normalize and cache it.
///
/// Concurrent misses each fetch; the last one to finish wins the cache slot.
///
/// # Errors
///
/// Will return `Err` if the cache is cold and the fetch fails.
pub async fn get_weekly_schedule(
    cache: &dyn ScheduleCache,
    source: &dyn MatchSource,
    ttl_seconds: u64,
) -> Result<WeeklySchedule, AppError> {
    if let Some(schedule) = cache.get(SCHEDULE_CACHE_KEY).await {
        return Ok(schedule);
    }

    let raws = source.fetch_matches().await?;
    let fetched = raws.len();
    let schedule = build_weekly_schedule(raws);
    info!(
        "Refreshed schedule: {} of {fetched} matches across {} weeks",
        schedule.match_count(),
        schedule.non_empty_weeks().count()
    );

    cache
        .set(SCHEDULE_CACHE_KEY, schedule.clone(), ttl_seconds)
        .await;
    Ok(schedule)
}

/// `POST /games/data`: the schedule as JSON, guarded by the nonce.
pub async fn games_data(
    form: Option<web::Form<HashMap<String, String>>>,
    query: web::Query<HashMap<String, String>>,
    ctx: Data<GamesContext>,
) -> impl Responder {
    let nonce = form
        .as_ref()
        .and_then(|f| f.get("nonce"))
        .or_else(|| query.get("nonce"))
        .map(String::as_str)
        .unwrap_or("");

    if !ctx.nonce.verify(nonce, chrono::Utc::now()) {
        warn!("Rejected games data request with an invalid nonce");
        return HttpResponse::Forbidden().json(GamesResponse::failure("Invalid security token"));
    }

    match get_weekly_schedule(ctx.cache.as_ref(), ctx.source.as_ref(), ctx.cache_ttl_seconds).await
    {
        Ok(schedule) => HttpResponse::Ok().json(GamesResponse::success(schedule)),
        Err(_) => HttpResponse::BadGateway().json(GamesResponse::failure("Unable to fetch games data")),
    }
}
