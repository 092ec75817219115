// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use assert_cmd::Command;

/// Command for the built binary with logging kept quiet.
#[allow(dead_code)]
pub fn daily_avg() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_daily_avg"));
    cmd.arg("--quiet");
    cmd
}
