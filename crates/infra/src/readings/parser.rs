// crates/infra/src/readings/parser.rs
use chrono::{NaiveDate, NaiveDateTime};
use daily_avg_shared_kernel::{Granularity, Reading};
use serde_json::Value;
use thiserror::Error;

/// 受け付けるタイムスタンプ書式
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// `YYYY-MM-DD`
const DATE_PREFIX_LEN: usize = 10;

/// Why a line was rejected.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object of timestamp/value pairs")]
    NotAnObject,

    #[error("unrecognised timestamp '{0}'")]
    Timestamp(String),

    #[error("value for '{timestamp}' is not a number: {value}")]
    Value { timestamp: String, value: String },

    #[error("value for '{timestamp}' is not finite")]
    NonFinite { timestamp: String },
}

/// Parse one input line into readings keyed at `granularity`.
///
/// Blank lines yield nothing. Members whose value is `""` or `null` carry no
/// measurement and are skipped. Any other bad member rejects the whole line.
pub fn parse_line(line: &str, granularity: Granularity) -> Result<Vec<Reading>, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let Value::Object(members) = serde_json::from_str::<Value>(line)? else {
        return Err(LineError::NotAnObject);
    };

    let mut readings = Vec::with_capacity(members.len());
    for (timestamp, value) in &members {
        let Some(value) = parse_value(timestamp, value)? else {
            continue;
        };
        let at = parse_timestamp(timestamp)?;
        readings.push(Reading::new(granularity.key_for(&at), value));
    }
    Ok(readings)
}

/// Full timestamp first, otherwise a leading `YYYY-MM-DD` date at midnight
/// (covers `2014-02-13T12:00`, `...Z`, offsets and bare dates).
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, LineError> {
    let trimmed = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| date_prefix(trimmed))
        .ok_or_else(|| LineError::Timestamp(raw.to_string()))
}

fn date_prefix(raw: &str) -> Option<NaiveDateTime> {
    let date = raw.get(..DATE_PREFIX_LEN)?;
    let rest = &raw[DATE_PREFIX_LEN..];
    if !(rest.is_empty() || rest.starts_with(['T', 't', ' '])) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)
}

fn parse_value(timestamp: &str, value: &Value) -> Result<Option<f64>, LineError> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::String(text) if text.trim().is_empty() => return Ok(None),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Number(number) => number.as_f64(),
        _ => None,
    };
    let Some(parsed) = parsed else {
        return Err(LineError::Value { timestamp: timestamp.to_string(), value: value.to_string() });
    };
    if !parsed.is_finite() {
        return Err(LineError::NonFinite { timestamp: timestamp.to_string() });
    }
    Ok(Some(parsed))
}
