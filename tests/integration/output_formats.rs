use predicates::prelude::*;

use crate::common::{READINGS, Workspace, daily_avg};

fn run(args: &[&str]) -> String {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    let out = daily_avg().args(args).arg(&input).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn table_has_header_and_footer() {
    let out = run(&["list"]);
    assert!(out.contains("KEY"));
    assert!(out.contains("AVERAGE"));
    assert!(out.contains("-2.50"));
    assert!(out.trim_end().ends_with("3 aggregate(s)"));
}

#[test]
fn tsv_uses_tabs() {
    let out = run(&["-f", "tsv", "list"]);
    assert!(out.starts_with("key\taverage\tcount\tsum\n"));
    assert!(out.contains("2014-02-13\t20\t2\t40\n"));
}

#[test]
fn json_is_an_array_of_aggregates() {
    let out = run(&["-f", "json", "list"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["key"], "2014-02-13");
    assert_eq!(rows[0]["count"], 2);
    assert_eq!(rows[0]["average"], 20.0);
}

#[test]
fn jsonl_emits_one_object_per_line() {
    let out = run(&["-f", "jsonl", "list"]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["key"].is_string());
    }
}

#[test]
fn markdown_table_rows() {
    let out = run(&["-f", "md", "list"]);
    assert!(out.contains("| 2014-02-22 | 20.00 | 1 | 20.00 |"));
}

#[test]
fn extreme_as_json_carries_average() {
    let out = run(&["-i", "by-value", "-f", "json", "min"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["average"], -2.5);
    assert_eq!(value["aggregates"][0]["key"], "2014-02-14");
}

#[test]
fn bucket_table_lists_chains() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    daily_avg()
        .args(["-i", "chained", "buckets"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("BUCKET").and(predicate::str::contains("2014-02-22")));
}
