#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};

use kbbco_games::RawMatch;
use kbbco_games::controller::client::{MatchSource, parse_match_body};
use kbbco_games::mvu::error::AppError;

/// Weeks holding at least one readable match in `test1_matches.json`.
pub const FIXTURE_WEEKS: [u32; 5] = [37, 40, 41, 43, 46];

pub fn fixture_matches() -> Result<Vec<RawMatch>, AppError> {
    parse_match_body(include_str!("../test1_matches.json"))
}

/// Wednesday of ISO week 41 of 2025.
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 8).expect("valid date")
}

pub fn raw_match(home: &str, away: &str, date: &str, time: &str, result: &str) -> RawMatch {
    RawMatch {
        home_name: home.to_string(),
        away_name: away.to_string(),
        home_guid: format!("{home}-guid"),
        away_guid: format!("{away}-guid"),
        date: date.to_string(),
        start_time: time.to_string(),
        result: result.to_string(),
        competition: "Provinciaal".to_string(),
        date_code: 0,
    }
}

/// Serves a fixed list of matches and counts how often it was asked.
pub struct StubSource {
    matches: Vec<RawMatch>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new(matches: Vec<RawMatch>) -> Self {
        Self {
            matches,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MatchSource for StubSource {
    async fn fetch_matches(&self) -> Result<Vec<RawMatch>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.matches.clone())
    }
}

/// Always fails the way an unreachable API does.
#[derive(Default)]
pub struct FailingSource {
    calls: AtomicUsize,
}

impl FailingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MatchSource for FailingSource {
    async fn fetch_matches(&self) -> Result<Vec<RawMatch>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Status {
            url: "http://league.invalid/matches".to_string(),
            status: 503,
        })
    }
}
