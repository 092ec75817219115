// crates/infra/src/export.rs
use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use daily_avg_ports::export::{AggregateRecord, RecordSink};
use daily_avg_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

pub const CSV_HEADER: &str = "Date,Average Temperature,Number of Measurements";

/// On-disk layout of an export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// `Date,Average Temperature,Number of Measurements`, averages to 2 places.
    Csv,
    /// Pretty-printed array of records.
    Json,
    /// Human-readable block per record.
    Report,
}

impl RecordFormat {
    /// `.json` → JSON, `.txt` → report, anything else CSV.
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()).unwrap_or_default();
        match ext.as_str() {
            "json" => Self::Json,
            "txt" => Self::Report,
            _ => Self::Csv,
        }
    }

    pub fn render(self, records: &[AggregateRecord]) -> Result<String> {
        match self {
            Self::Csv => Ok(render_csv(records)),
            Self::Json => {
                let mut out = serde_json::to_string_pretty(records).map_err(InfrastructureError::from)?;
                out.push('\n');
                Ok(out)
            }
            Self::Report => Ok(render_report(records)),
        }
    }
}

/// Writes records to a file, replacing it atomically.
#[derive(Debug, Clone)]
pub struct RecordFileSink {
    path: PathBuf,
    format: RecordFormat,
}

impl RecordFileSink {
    /// Format is chosen from the file extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = RecordFormat::from_path(&path);
        Self { path, format }
    }
}

impl RecordSink for RecordFileSink {
    fn write_records(&self, records: &[AggregateRecord]) -> Result<()> {
        let data = self.format.render(records)?;
        FileWriter::atomic_write(&self.path, data.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: self.path.clone(), source })?;
        log::debug!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

fn render_csv(records: &[AggregateRecord]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        let _ = writeln!(out, "{},{:.2},{}", record.key, record.average, record.count);
    }
    out
}

fn render_report(records: &[AggregateRecord]) -> String {
    let mut out = String::from("Temperature Records Export\n========================\n\n");
    for record in records {
        let _ = writeln!(out, "Date: {}", record.key);
        let _ = writeln!(out, "Average Temperature: {:.2}°C", record.average);
        let _ = writeln!(out, "Number of measurements: {}", record.count);
        out.push_str("------------------------\n");
    }
    out
}
