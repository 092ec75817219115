// src/cli/mod.rs
mod args;
mod parsers;
mod value_enum;

pub use args::{Args, CliCommand, Inputs};
use clap::Parser;
use daily_avg_domain::IndexKind;
use daily_avg_shared_kernel::{PresentationError, Result};
pub use parsers::{AverageArg, KeyArg};
pub use value_enum::{CliGranularity, CliIndexKind, CliOutputFormat};

use crate::{
    config::{Command, Config, ConfigBuilder},
    logger,
};

fn validate_index_for(command: &Command, index: IndexKind) -> Result<()> {
    if matches!(command, Command::Buckets) && index != IndexKind::Chained {
        return Err(PresentationError::InvalidValue {
            flag: "--index".to_string(),
            value: index.to_string(),
            reason: "buckets is only available with --index chained".to_string(),
        }
        .into());
    }
    Ok(())
}

fn make_command(command: &CliCommand) -> Command {
    match command {
        CliCommand::List(_) => Command::List,
        CliCommand::Get { key, .. } => Command::Get { key: key.0.clone() },
        CliCommand::Edit { key, average, .. } => Command::Edit { key: key.0.clone(), average: average.0 },
        CliCommand::Delete { key, .. } => Command::Delete { key: key.0.clone() },
        CliCommand::Min(_) => Command::Min,
        CliCommand::Max(_) => Command::Max,
        CliCommand::Find { average, .. } => Command::Find { average: average.0 },
        CliCommand::Buckets(_) => Command::Buckets,
    }
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments do not combine into a valid run.
pub fn load_config() -> Result<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// # Errors
///
/// Returns `Err` when the subcommand cannot run on the chosen index or the
/// builder rejects the options.
pub fn build_config(args: &Args) -> Result<Config> {
    let command = make_command(&args.command);
    let index = IndexKind::from(args.index);
    validate_index_for(&command, index)?;

    let mut builder = ConfigBuilder::default();
    let paths = &args.command.inputs().paths;
    if !paths.is_empty() {
        builder.inputs(paths.clone());
    }
    builder
        .command(command)
        .index(index)
        .granularity(args.granularity)
        .format(args.format)
        .export(args.export.clone())
        .strict(args.strict)
        .progress(args.progress)
        .log_level(logger::level_for(args.verbose, args.quiet))
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}
