mod common;
use crate::common::{FailingSource, StubSource, fixture_matches};

use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{App, test};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use kbbco_games::controller::cache::{CACHE_TTL_SECONDS, MemoryCache, ScheduleCache};
use kbbco_games::controller::client::MatchSource;
use kbbco_games::controller::games::games_data;
use kbbco_games::controller::nonce::NonceIssuer;
use kbbco_games::{CLUB_TIMEZONE, GamesContext, NONCE_ACTION, SCHEDULE_CACHE_KEY};

fn context(source: Arc<dyn MatchSource>) -> GamesContext {
    GamesContext {
        cache: Arc::new(MemoryCache::new()),
        source,
        nonce: NonceIssuer::new("test-secret", NONCE_ACTION),
        cache_ttl_seconds: CACHE_TTL_SECONDS,
        tz: CLUB_TIMEZONE,
    }
}

#[actix_web::test]
async fn test7_rejects_missing_or_forged_nonce() -> Result<(), Box<dyn std::error::Error>> {
    let source = Arc::new(StubSource::new(fixture_matches()?));
    let ctx = context(source.clone());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(ctx))
            .route("/games/data", web::post().to(games_data)),
    )
    .await;

    for body in [vec![], vec![("nonce", "0123456789")]] {
        let req = test::TestRequest::post()
            .uri("/games/data")
            .set_form(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], Value::Bool(false));
        assert_eq!(json["error"], "Invalid security token");
    }
    assert_eq!(source.calls(), 0);
    Ok(())
}

#[actix_web::test]
async fn test7_returns_weekly_schedule() -> Result<(), Box<dyn std::error::Error>> {
    let source = Arc::new(StubSource::new(fixture_matches()?));
    let ctx = context(source.clone());
    let nonce = ctx.nonce.issue(Utc::now());
    let cache = ctx.cache.clone();
    let app = test::init_service(
        App::new()
            .app_data(Data::new(ctx))
            .route("/games/data", web::post().to(games_data)),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/games/data")
            .set_form([("nonce", nonce.as_str())])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], Value::Bool(true));
        let data = json["data"].as_object().ok_or("data is an object keyed by week")?;
        let mut weeks: Vec<u32> = data.keys().filter_map(|k| k.parse().ok()).collect();
        weeks.sort_unstable();
        assert_eq!(weeks, common::FIXTURE_WEEKS);
        assert_eq!(json["data"]["41"][0]["team_info"]["display"], "ONE");
        assert_eq!(json["data"]["41"][0]["score_home"], "78");
    }
    // second request is served from cache
    assert_eq!(source.calls(), 1);
    assert!(cache.get(SCHEDULE_CACHE_KEY).await.is_some());
    Ok(())
}

#[actix_web::test]
async fn test7_nonce_in_query_string() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = context(Arc::new(StubSource::new(fixture_matches()?)));
    let nonce = ctx.nonce.issue(Utc::now());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(ctx))
            .route("/games/data", web::post().to(games_data)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/games/data?nonce={nonce}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn test7_upstream_failure_is_bad_gateway() -> Result<(), Box<dyn std::error::Error>> {
    let source = Arc::new(FailingSource::default());
    let ctx = context(source.clone());
    let nonce = ctx.nonce.issue(Utc::now());
    let app = test::init_service(
        App::new()
            .app_data(Data::new(ctx))
            .route("/games/data", web::post().to(games_data)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/games/data")
        .set_form([("nonce", nonce.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["success"], Value::Bool(false));
    assert_eq!(json["error"], "Unable to fetch games data");
    assert_eq!(source.calls(), 1);
    Ok(())
}

#[::core::prelude::v1::test]
fn test7_nonce_lifetime() {
    let issuer = NonceIssuer::new("test-secret", NONCE_ACTION);
    let issued_at = Utc::now();
    let token = issuer.issue(issued_at);
    assert_eq!(token.len(), 10);
    assert!(issuer.verify(&token, issued_at));
    assert!(issuer.verify(&token, issued_at + chrono::Duration::hours(12)));
    assert!(!issuer.verify(&token, issued_at + chrono::Duration::hours(25)));

    let other_action = NonceIssuer::new("test-secret", "something_else");
    assert!(!other_action.verify(&token, issued_at));
    let other_secret = NonceIssuer::new("another-secret", NONCE_ACTION);
    assert!(!other_secret.verify(&token, issued_at));
}
