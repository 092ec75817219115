use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{READINGS, READINGS_WITH_GARBAGE, Workspace, daily_avg};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_daily_avg"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("daily_avg"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_daily_avg"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn lists_a_file_as_table() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    daily_avg()
        .arg("list")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2014-02-13").and(predicate::str::contains("3 aggregate(s)")));
}

#[test]
fn reads_stdin_when_no_path_is_given() {
    daily_avg()
        .args(["--format", "csv", "get", "2014-02-22"])
        .write_stdin(READINGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("2014-02-22,20,1,20"));
}

#[test]
fn missing_key_fails_with_message() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    daily_avg()
        .arg("get")
        .arg("1999-01-01")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record found for key '1999-01-01'"));
}

#[test]
fn buckets_require_the_chained_index() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    daily_avg()
        .arg("buckets")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--index chained"));
}

#[test]
fn min_on_key_tree_is_unsupported() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    daily_avg()
        .arg("min")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn lenient_mode_skips_bad_lines() {
    let ws = Workspace::new();
    let input = ws.write("bad.jsonl", READINGS_WITH_GARBAGE);
    Command::new(env!("CARGO_BIN_EXE_daily_avg"))
        .args(["--format", "csv", "list"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2014-02-22"))
        .stderr(predicate::str::contains("[warn]"));
}

#[test]
fn strict_mode_rejects_bad_lines() {
    let ws = Workspace::new();
    let input = ws.write("bad.jsonl", READINGS_WITH_GARBAGE);
    daily_avg()
        .args(["--strict", "list"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn rejects_non_finite_average() {
    daily_avg().args(["find", "NaN"]).write_stdin(READINGS).assert().failure();
}

#[test]
fn quiet_conflicts_with_verbose() {
    Command::new(env!("CARGO_BIN_EXE_daily_avg"))
        .args(["-q", "-v", "list"])
        .write_stdin(READINGS)
        .assert()
        .failure();
}
