use chrono::{DateTime, Utc};
use sha256::digest as sha256_digest;

/// Length of a nonce tick; a token stays valid for the tick it was issued in
/// and the one after.
const TICK_SECONDS: i64 = 12 * 60 * 60;
const NONCE_LEN: usize = 10;

/// Issues and checks short-lived anti-forgery tokens bound to one action.
#[derive(Debug, Clone)]
pub struct NonceIssuer {
    secret: String,
    action: String,
}

impl NonceIssuer {
    #[must_use]
    pub fn new(secret: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            action: action.into(),
        }
    }

    #[must_use]
    pub fn issue(&self, now: DateTime<Utc>) -> String {
        self.token_for_tick(tick(now))
    }

    #[must_use]
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> bool {
        if token.len() != NONCE_LEN {
            return false;
        }
        let current = tick(now);
        [current, current - 1]
            .into_iter()
            .any(|t| self.token_for_tick(t) == token)
    }

    fn token_for_tick(&self, tick: i64) -> String {
        let hash = sha256_digest(format!("{tick}|{}|{}", self.action, self.secret));
        hash[..NONCE_LEN].to_string()
    }
}

fn tick(now: DateTime<Utc>) -> i64 {
    now.timestamp().div_euclid(TICK_SECONDS)
}
