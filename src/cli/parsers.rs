// src/cli/parsers.rs
use std::str::FromStr;

/// Average temperature argument. Accepts an optional `°C` / `C` suffix and
/// rejects NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageArg(pub f64);

impl FromStr for AverageArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix("°C")
            .or_else(|| trimmed.strip_suffix('C'))
            .or_else(|| trimmed.strip_suffix('c'))
            .unwrap_or(trimmed)
            .trim();
        let value: f64 = number.parse().map_err(|_| format!("Invalid average: {s}"))?;
        if !value.is_finite() {
            return Err(format!("Average must be finite: {s}"));
        }
        Ok(Self(value))
    }
}

/// Aggregation key argument (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyArg(pub String);

impl FromStr for KeyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Key must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}
