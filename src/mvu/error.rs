use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("empty or invalid response: {0}")]
    EmptyResponse(String),
    #[error("preference error: {0}")]
    Preference(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<String> for AppError {
    fn from(e: String) -> Self {
        Self::Other(e)
    }
}

impl From<&str> for AppError {
    fn from(e: &str) -> Self {
        Self::Other(e.to_string())
    }
}
