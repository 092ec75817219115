// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match daily_avg::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[error] {e:#}");
            ExitCode::FAILURE
        }
    }
}
