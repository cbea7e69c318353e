use kbbco_games::args::{self, CleanArgs};
use kbbco_games::controller::cache::MemoryCache;
use kbbco_games::controller::client::HttpMatchSource;
use kbbco_games::controller::games::games_data;
use kbbco_games::controller::nonce::NonceIssuer;
use kbbco_games::controller::widget::widget;
use kbbco_games::mvu::widget::{DEFAULT_SHOW_WEEKS, DEFAULT_THEME};
use kbbco_games::{GamesContext, NONCE_ACTION};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            error!("Invalid arguments: {e}");
            std::process::exit(2);
        }
    };
    let args_for_web = args.clone();

    let source = HttpMatchSource::new(
        args.api_url.clone(),
        args.fetch_timeout,
        args.accept_invalid_certs,
    )?;
    let ctx = GamesContext {
        cache: Arc::new(MemoryCache::new()),
        source: Arc::new(source),
        nonce: NonceIssuer::new(args.nonce_secret.clone(), NONCE_ACTION),
        cache_ttl_seconds: args.cache_ttl_seconds,
        tz: args.timezone,
    };
    ctx.invalidate().await;
    let ctx_for_web = ctx.clone();

    let static_dir = args.static_dir.clone();
    info!(
        "KBBCO Games listening on {}:{} (api {}, cache ttl {}s, zone {})",
        args.bind, args.port, args.api_url, args.cache_ttl_seconds, args.timezone
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(ctx_for_web.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(index))
            .route("/games/data", web::post().to(games_data))
            .route("/games/widget", web::get().to(widget))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;

    ctx.invalidate().await;
    info!("KBBCO Games stopped, schedule cache cleared");
    Ok(())
}

async fn index(
    query: web::Query<HashMap<String, String>>,
    ctx: Data<GamesContext>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let show_weeks = query
        .get("show_weeks")
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SHOW_WEEKS);
    let theme = query
        .get("theme")
        .map_or(DEFAULT_THEME, String::as_str);
    let nonce = ctx.nonce.issue(chrono::Utc::now());

    let markup =
        kbbco_games::view::index::render_index_template(&args.title, &nonce, show_weeks, theme);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
