// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use daily_avg_domain::ActiveIndex;
use daily_avg_infra::{JsonLinesSource, RecordFileSink, StderrProgress};
use daily_avg_usecase::{BuildIndex, BuildIndexOutput, ExportAggregates, QueryEngine};

use crate::{
    cli,
    config::{Command, Config},
    logger,
    presentation,
};

pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    logger::init(config.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Build the index, run the subcommand, then export if requested.
pub fn execute<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let source = JsonLinesSource;
    let progress = StderrProgress;
    let mut build = BuildIndex::new(&source);
    if config.progress {
        build = build.with_progress(&progress);
    }

    let BuildIndexOutput { mut index, readings, skipped } =
        build.run(&config.ingest_plan(), config.index).context("failed to build index")?;
    if skipped > 0 {
        log::warn!("{skipped} malformed line(s) skipped");
    }
    log::info!("{readings} readings folded into {} aggregates", index.len());

    run_command(config, &mut index, out).with_context(|| format!("{} failed", config.command.name()))?;

    if let Some(path) = &config.export {
        let sink = RecordFileSink::new(path);
        ExportAggregates::new(&sink)
            .run(&index)
            .with_context(|| format!("failed to export to {}", path.display()))?;
    }
    Ok(())
}

fn run_command<W: Write>(config: &Config, index: &mut ActiveIndex, out: &mut W) -> Result<()> {
    let format = config.format;
    let mut engine = QueryEngine::new(index);
    match &config.command {
        Command::List => presentation::write_aggregates(out, &engine.entries(), format)?,
        Command::Get { key } => {
            let found = engine.lookup(key)?.clone();
            presentation::write_aggregates(out, &[found], format)?;
        }
        Command::Edit { key, average } => {
            let edited = engine.edit(key, *average)?;
            presentation::write_aggregates(out, &[edited], format)?;
        }
        Command::Delete { key } => {
            let removed = engine.delete(key)?;
            presentation::write_aggregates(out, &[removed], format)?;
        }
        Command::Min => presentation::write_extreme(out, "Minimum", &engine.min()?, format)?,
        Command::Max => presentation::write_extreme(out, "Maximum", &engine.max()?, format)?,
        Command::Find { average } => {
            presentation::write_aggregates(out, &engine.find_all_equal(*average)?, format)?;
        }
        Command::Buckets => presentation::write_buckets(out, &engine.buckets()?, format)?,
    }
    Ok(())
}
