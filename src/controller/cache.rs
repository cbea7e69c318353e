use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::WeeklySchedule;

pub const CACHE_TTL_SECONDS: u64 = 15 * 60;

/// Whole-value cache for the normalized schedule.
#[async_trait]
pub trait ScheduleCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<WeeklySchedule>;
    async fn set(&self, key: &str, value: WeeklySchedule, ttl_seconds: u64);
    async fn delete(&self, key: &str);
}

#[derive(Clone)]
pub struct CacheEntry {
    pub data: WeeklySchedule,
    pub cached_time: DateTime<Utc>,
    pub ttl: chrono::Duration,
}

impl CacheEntry {
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.cached_time < self.ttl
    }
}

pub type CacheMap = Arc<RwLock<HashMap<String, CacheEntry>>>;

#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: CacheMap,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` as if it had been cached at `cached_time`.
    pub async fn set_at(
        &self,
        key: &str,
        value: WeeklySchedule,
        ttl_seconds: u64,
        cached_time: DateTime<Utc>,
    ) {
        let ttl = chrono::Duration::seconds(i64::from(u32::try_from(ttl_seconds).unwrap_or(u32::MAX)));
        let mut map = self.entries.write().await;
        map.insert(
            key.to_string(),
            CacheEntry {
                data: value,
                cached_time,
                ttl,
            },
        );
    }
}

#[async_trait]
impl ScheduleCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<WeeklySchedule> {
        let now = Utc::now();
        {
            let map = self.entries.read().await;
            match map.get(key) {
                Some(entry) if entry.is_fresh(now) => return Some(entry.data.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // expired
        let mut map = self.entries.write().await;
        if map.get(key).is_some_and(|entry| !entry.is_fresh(now)) {
            map.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: WeeklySchedule, ttl_seconds: u64) {
        self.set_at(key, value, ttl_seconds, Utc::now()).await;
    }

    async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}
