// crates/shared-kernel/src/value_objects/granularity.rs
use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How much of a timestamp forms the aggregation key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// `YYYY-MM-DD`
    #[default]
    Day,
    /// `YYYY-MM`
    Month,
    /// `YYYY`
    Year,
}

impl Granularity {
    /// Truncate `timestamp` to the key for this granularity.
    pub fn key_for(self, timestamp: &NaiveDateTime) -> String {
        match self {
            Self::Day => timestamp.format("%Y-%m-%d").to_string(),
            Self::Month => timestamp.format("%Y-%m").to_string(),
            Self::Year => format!("{:04}", timestamp.year()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(format!("Unknown granularity: {other}")),
        }
    }
}
