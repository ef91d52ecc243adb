use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One past search as returned by the history service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub search_text: String,
    #[serde(deserialize_with = "de_search_datetime")]
    pub search_datetime: DateTime<Utc>,
}

impl SearchRecord {
    pub fn new(search_text: impl Into<String>, search_datetime: DateTime<Utc>) -> Self {
        Self {
            search_text: search_text.into(),
            search_datetime,
        }
    }
}

/// Accepts every timestamp shape the service has been seen to send.
///
/// Strings are tried as RFC 3339, then as an offset-less datetime in local
/// time, then as a bare date at UTC midnight. Numbers are epoch milliseconds.
fn de_search_datetime<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => parse_timestamp(&s)
            .ok_or_else(|| D::Error::custom(format!("cannot parse '{}' as a timestamp", s))),
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or_else(|| D::Error::custom(format!("epoch millis out of range: {}", n))),
        _ => Err(D::Error::custom("expected timestamp string or epoch millis")),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = s.parse::<DateTime<FixedOffset>>() {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));
    }
    s.parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
