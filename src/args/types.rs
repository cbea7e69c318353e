use chrono_tz::Tz;
use clap::Parser;
use std::time::Duration;

use crate::controller::cache::CACHE_TTL_SECONDS;
use crate::controller::client::{DEFAULT_API_URL, FETCH_TIMEOUT_SECONDS};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// League endpoint returning the club's matches as a JSON array.
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_API_URL,
        value_parser = crate::args::validation::check_http_url
    )]
    pub api_url: String,
    /// How long a fetched schedule is served from cache.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = CACHE_TTL_SECONDS,
        value_parser = crate::args::validation::check_positive_secs
    )]
    pub cache_ttl_secs: u64,
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = FETCH_TIMEOUT_SECONDS,
        value_parser = crate::args::validation::check_positive_secs
    )]
    pub fetch_timeout_secs: u64,
    /// Secret mixed into the anti-forgery tokens. Random per start if omitted.
    #[arg(long, value_name = "SECRET")]
    pub nonce_secret: Option<String>,
    /// Skip TLS certificate checks against the league API.
    #[arg(long)]
    pub accept_invalid_certs: bool,
    #[arg(
        long,
        value_name = "DIR",
        default_value = "./static",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub static_dir: String,
    #[arg(long, value_name = "TITLE", default_value = "KBBCO Wedstrijden")]
    pub title: String,
    /// IANA zone the match times are written in, e.g. Europe/Brussels.
    #[arg(
        long,
        value_name = "ZONE",
        default_value = "Europe/Brussels",
        value_parser = crate::args::validation::check_timezone
    )]
    pub timezone: Tz,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub api_url: String,
    pub cache_ttl_seconds: u64,
    pub fetch_timeout: Duration,
    pub nonce_secret: String,
    pub accept_invalid_certs: bool,
    pub static_dir: String,
    pub title: String,
    pub timezone: Tz,
}
