use chrono_tz::Tz;
use reqwest::Url;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_http_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(format!("The url scheme '{other}' is not supported, use http or https.")),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a whole number of seconds above zero
pub fn check_positive_secs(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("The number of seconds must be greater than zero.".to_string()),
        Ok(secs) => Ok(secs),
        Err(e) => Err(format!("'{value}' is not a number of seconds: {e}")),
    }
}

/// # Errors
///
/// Will return `Err` if the directory is not readable
pub fn check_readable_dir(dir: &str) -> Result<String, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The static directory '{dir}' is not readable."));
    }
    Ok(dir.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not an IANA time zone name
pub fn check_timezone(value: &str) -> Result<Tz, String> {
    value
        .trim()
        .parse::<Tz>()
        .map_err(|e| format!("'{value}' is not a known time zone: {e}"))
}
