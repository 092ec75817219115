// crates/infra/src/readings/source.rs
use std::{io::BufRead, path::Path};

use daily_avg_ports::readings::{IngestPlan, ReadingBatch, ReadingSource};
use daily_avg_shared_kernel::{InfrastructureError, Result};

use super::parser::parse_line;
use crate::persistence::FileReader;

/// Reads JSON-lines files (or standard input for `-`) listed in the plan.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLinesSource;

impl ReadingSource for JsonLinesSource {
    fn collect(&self, plan: &IngestPlan) -> Result<ReadingBatch> {
        let mut batch = ReadingBatch::default();
        for input in &plan.inputs {
            let reader = FileReader::open_input(input)
                .map_err(|source| InfrastructureError::FileRead { path: input.clone(), source })?;
            read_lines(reader, input, plan, &mut batch)?;
        }
        Ok(batch)
    }
}

/// Parse every line of `reader` into `batch`. `origin` only labels messages.
pub fn read_lines<R: BufRead>(reader: R, origin: &Path, plan: &IngestPlan, batch: &mut ReadingBatch) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line =
            line.map_err(|source| InfrastructureError::FileRead { path: origin.to_path_buf(), source })?;
        match parse_line(&line, plan.granularity) {
            Ok(readings) => batch.readings.extend(readings),
            Err(err) if plan.strict => {
                return Err(InfrastructureError::MalformedRecord {
                    line: line_no,
                    reason: format!("{}: {err}", origin.display()),
                }
                .into());
            }
            Err(err) => {
                log::warn!("{}:{line_no}: skipping malformed line: {err}", origin.display());
                batch.skipped += 1;
            }
        }
    }
    Ok(())
}
