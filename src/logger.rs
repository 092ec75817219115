// src/logger.rs
//! Minimal stderr backend for the `log` facade.
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Writes `[level] message` lines to standard error.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{}", format_line(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_line(record: &Record<'_>) -> String {
    let level = record.level().as_str().to_ascii_lowercase();
    if record.level() >= log::Level::Debug {
        format!("[{level}] {}: {}", record.target(), record.args())
    } else {
        format!("[{level}] {}", record.args())
    }
}

/// Install the logger. A second call only adjusts the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// `-q` silences everything but errors; each `-v` raises the level one step
/// from the default of warnings.
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
