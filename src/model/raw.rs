use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One match record as returned by the league API.
///
/// Missing or `null` fields read as empty, so a record only has to be an
/// object to deserialize; the normalizer decides what is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMatch {
    #[serde(rename = "tTNaam", default, deserialize_with = "lenient_string")]
    pub home_name: String,
    #[serde(rename = "tUNaam", default, deserialize_with = "lenient_string")]
    pub away_name: String,
    #[serde(rename = "tTGUID", default, deserialize_with = "lenient_string")]
    pub home_guid: String,
    #[serde(rename = "tUGUID", default, deserialize_with = "lenient_string")]
    pub away_guid: String,
    #[serde(rename = "datumString", default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(rename = "beginTijd", default, deserialize_with = "lenient_string")]
    pub start_time: String,
    #[serde(rename = "uitslag", default, deserialize_with = "lenient_string")]
    pub result: String,
    #[serde(rename = "pouleNaam", default, deserialize_with = "lenient_string")]
    pub competition: String,
    #[serde(rename = "jsDTCode", default, deserialize_with = "lenient_code")]
    pub date_code: i64,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// integer, float or numeric string
fn lenient_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
