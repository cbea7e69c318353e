use log::warn;
use std::collections::BTreeSet;
use std::sync::Mutex;

use super::uri::{decode_uri_component, encode_uri_component};
use crate::mvu::error::AppError;

/// Key the team selection is stored under.
pub const FILTER_PREFERENCE_KEY: &str = "kbbco_team_filter";

/// Where the visitor's team selection survives between visits.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Option<BTreeSet<String>>;

    /// # Errors
    ///
    /// Returns `AppError::Preference` if the selection cannot be stored.
    fn save(&self, teams: &BTreeSet<String>) -> Result<(), AppError>;
}

/// Parses the stored JSON array. Anything unreadable counts as "never stored".
#[must_use]
pub fn parse_team_list(raw: &str) -> Option<BTreeSet<String>> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(teams) => Some(teams.into_iter().collect()),
        Err(e) => {
            warn!("Failed to load filter preferences: {e}");
            None
        }
    }
}

/// # Errors
///
/// Returns `AppError::Preference` if serialization fails.
pub fn serialize_team_list(teams: &BTreeSet<String>) -> Result<String, AppError> {
    serde_json::to_string(&teams.iter().collect::<Vec<_>>())
        .map_err(|e| AppError::Preference(e.to_string()))
}

/// Preference carried in a browser cookie: the incoming value is read once,
/// a saved value is kept until the response is built.
#[derive(Debug, Default)]
pub struct CookiePreferences {
    incoming: Option<String>,
    outgoing: Mutex<Option<String>>,
}

impl CookiePreferences {
    #[must_use]
    pub fn new(cookie_value: Option<String>) -> Self {
        Self {
            incoming: cookie_value,
            outgoing: Mutex::new(None),
        }
    }

    /// The encoded value to send back, if the selection changed.
    #[must_use]
    pub fn take_outgoing(&self) -> Option<String> {
        self.outgoing.lock().ok().and_then(|mut v| v.take())
    }
}

impl PreferenceStore for CookiePreferences {
    fn load(&self) -> Option<BTreeSet<String>> {
        let raw = self.incoming.as_deref()?;
        let decoded = decode_uri_component(raw).or_else(|| {
            warn!("Filter cookie is not URI-encoded, reading it as is");
            Some(raw.to_string())
        })?;
        parse_team_list(&decoded)
    }

    fn save(&self, teams: &BTreeSet<String>) -> Result<(), AppError> {
        let encoded = encode_uri_component(&serialize_team_list(teams)?);
        let mut outgoing = self
            .outgoing
            .lock()
            .map_err(|e| AppError::Preference(e.to_string()))?;
        *outgoing = Some(encoded);
        Ok(())
    }
}

/// In-process store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    value: Mutex<Option<String>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self {
            value: Mutex::new(Some(raw.to_string())),
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<BTreeSet<String>> {
        parse_team_list(&self.raw()?)
    }

    fn save(&self, teams: &BTreeSet<String>) -> Result<(), AppError> {
        let serialized = serialize_team_list(teams)?;
        let mut value = self
            .value
            .lock()
            .map_err(|e| AppError::Preference(e.to_string()))?;
        *value = Some(serialized);
        Ok(())
    }
}
