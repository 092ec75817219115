use predicates::prelude::*;

use crate::common::{READINGS, TWO_MONTHS, Workspace, daily_avg};

fn csv_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8(stdout.to_vec()).unwrap().lines().skip(1).map(str::to_string).collect()
}

#[test]
fn by_key_lists_in_key_order() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    let out = daily_avg().args(["-f", "csv", "list"]).arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        csv_lines(&out.stdout),
        vec!["2014-02-13,20,2,40", "2014-02-14,-2.5,1,-2.5", "2014-02-22,20,1,20"]
    );
}

#[test]
fn by_value_lists_by_average_then_key() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    let out = daily_avg().args(["-i", "by-value", "-f", "csv", "list"]).arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        csv_lines(&out.stdout),
        vec!["2014-02-14,-2.5,1,-2.5", "2014-02-13,20,2,40", "2014-02-22,20,1,20"]
    );
}

#[test]
fn by_value_extremes_report_every_tied_key() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    let out = daily_avg().args(["-i", "by-value", "-f", "csv", "max"]).arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(csv_lines(&out.stdout), vec!["2014-02-13,20,2,40", "2014-02-22,20,1,20"]);

    daily_avg()
        .args(["-i", "by-value", "-f", "csv", "min"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2014-02-14,-2.5,1,-2.5"));
}

#[test]
fn find_matches_exact_average_on_both_trees() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    for index in ["by-key", "by-value"] {
        let out = daily_avg().args(["-i", index, "-f", "csv", "find", "20"]).arg(&input).output().unwrap();
        assert!(out.status.success(), "{index}");
        assert_eq!(csv_lines(&out.stdout), vec!["2014-02-13,20,2,40", "2014-02-22,20,1,20"], "{index}");
    }
}

#[test]
fn chained_buckets_keep_colliding_keys_together() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    daily_avg()
        .args(["-i", "chained", "-f", "csv", "buckets"])
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("3,2014-02-22,20,1,20").and(predicate::str::contains("3,2014-02-13,20,2,40")),
        );
}

#[test]
fn edit_is_reflected_in_the_export() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    let export = ws.path().join("out.csv");
    for index in ["by-key", "by-value", "chained"] {
        daily_avg()
            .args(["-i", index, "-f", "csv", "--export"])
            .arg(&export)
            .args(["edit", "2014-02-13", "25"])
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("2014-02-13,25,2,50"));
        let written = ws.read("out.csv");
        assert!(written.starts_with("Date,Average Temperature,Number of Measurements\n"), "{index}");
        assert!(written.contains("2014-02-13,25.00,2"), "{index}");
    }
}

#[test]
fn delete_removes_the_key_from_the_export() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    let export = ws.path().join("out.json");
    daily_avg()
        .args(["-i", "chained", "--export"])
        .arg(&export)
        .args(["delete", "2014-02-22"])
        .arg(&input)
        .assert()
        .success();
    let records: serde_json::Value = serde_json::from_str(&ws.read("out.json")).unwrap();
    let keys: Vec<&str> = records.as_array().unwrap().iter().map(|r| r["key"].as_str().unwrap()).collect();
    assert_eq!(keys.len(), 2);
    assert!(!keys.contains(&"2014-02-22"));
}

#[test]
fn deleting_a_missing_key_fails() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    daily_avg()
        .args(["-i", "by-value", "delete", "2000-01-01"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record found"));
}

#[test]
fn multiple_inputs_accumulate_into_one_index() {
    let ws = Workspace::new();
    let first = ws.write("a.jsonl", r#"{"2014-02-13T00:00:00": 10.0}"#);
    let second = ws.write("b.jsonl", r#"{"2014-02-13T12:00:00": 20.0}"#);
    daily_avg()
        .args(["-f", "csv", "get", "2014-02-13"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("2014-02-13,15,2,30"));
}

#[test]
fn month_granularity_groups_by_month() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", TWO_MONTHS);
    let out = daily_avg().args(["-g", "month", "-f", "csv", "list"]).arg(&input).output().unwrap();
    assert!(out.status.success());
    assert_eq!(csv_lines(&out.stdout), vec!["2014-01,2,2,4", "2014-02,10,1,10"]);
}

#[test]
fn report_export_uses_the_text_layout() {
    let ws = Workspace::new();
    let input = ws.write("t.jsonl", READINGS);
    let export = ws.path().join("report.txt");
    daily_avg().arg("--export").arg(&export).arg("list").arg(&input).assert().success();
    let report = ws.read("report.txt");
    assert!(report.starts_with("Temperature Records Export\n"));
    assert!(report.contains("Date: 2014-02-14\nAverage Temperature: -2.50°C\nNumber of measurements: 1\n"));
}

#[test]
fn signed_zero_averages_split_min_and_max() {
    let ws = Workspace::new();
    let input = ws.write("z.jsonl", "{\"2014-02-13T00:00:00\": \"-0\"}\n{\"2014-02-14T00:00:00\": \"0\"}\n");
    for (query, key) in [("min", "2014-02-13"), ("max", "2014-02-14")] {
        let out = daily_avg().args(["-i", "by-value", "-f", "csv", query]).arg(&input).output().unwrap();
        assert!(out.status.success(), "{query}");
        let lines = csv_lines(&out.stdout);
        assert_eq!(lines.len(), 1, "{query}");
        assert!(lines[0].starts_with(key), "{query}");
    }
}
