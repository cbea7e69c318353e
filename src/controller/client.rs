use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::model::RawMatch;
use crate::mvu::error::AppError;

pub const DEFAULT_API_URL: &str =
    "https://vblcb.wisseq.eu/VBLCB_WebService/data/OrgMatchesByGuid?issguid=BVBL1075";
pub const FETCH_TIMEOUT_SECONDS: u64 = 15;

/// Source of raw match records.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// # Errors
    ///
    /// Will return `Err` if the records cannot be retrieved in full.
    async fn fetch_matches(&self) -> Result<Vec<RawMatch>, AppError>;
}

pub struct HttpMatchSource {
    client: Client,
    api_url: String,
}

impl HttpMatchSource {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("KBBCO-Games/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Use this when the client needs proxies, headers, etc.
    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl MatchSource for HttpMatchSource {
    async fn fetch_matches(&self) -> Result<Vec<RawMatch>, AppError> {
        info!("Requesting match data from {}", self.api_url);
        let resp = self.client.get(&self.api_url).send().await.map_err(|e| {
            error!("KBBCO Games API error: {e}");
            AppError::from(e)
        })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            error!("KBBCO Games API HTTP error: {status}");
            return Err(AppError::Status {
                url: self.api_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        parse_match_body(&body).inspect_err(|e| {
            error!("KBBCO Games: empty or invalid response from API: {e}");
        })
    }
}

/// Decodes the API body. Entries that are not objects are dropped one by
/// one; a body that is not an array, or holds no usable entry, is rejected
/// as a whole.
///
/// # Errors
///
/// Returns `AppError::Parse` for malformed JSON and `AppError::EmptyResponse`
/// for anything that is not an array with at least one object.
pub fn parse_match_body(body: &str) -> Result<Vec<RawMatch>, AppError> {
    let json: Value = serde_json::from_str(body)?;
    let Value::Array(items) = json else {
        return Err(AppError::EmptyResponse("body is not an array".into()));
    };
    if items.is_empty() {
        return Err(AppError::EmptyResponse("no matches returned".into()));
    }
    let total = items.len();
    let matches = items
        .into_iter()
        .filter(|item| {
            if !item.is_object() {
                debug!("Dropping match entry that is not an object: {item}");
            }
            item.is_object()
        })
        .map(|item| serde_json::from_value(item).map_err(AppError::from))
        .collect::<Result<Vec<RawMatch>, AppError>>()?;
    if matches.is_empty() {
        return Err(AppError::EmptyResponse(format!(
            "none of the {total} entries is a match"
        )));
    }
    Ok(matches)
}
