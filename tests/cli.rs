//! Runs the `cooccur` binary against feed files

use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const FEED: &str = "\
labels:
  - { id: 1, name: flying, frequency: 0 }
  - { id: 2, name: water, frequency: 0 }
  - { id: 3, name: lucid, frequency: 0 }
  - { id: 4, name: x, frequency: 0 }
entries:
  - { id: 1, labels: [1, 2] }
  - { id: 2, labels: [1, 3] }
  - { id: 3, labels: [2, 3] }
";

fn feed_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str], feed: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cooccur"))
        .args(args)
        .arg("--feed")
        .arg(feed)
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    assert!(output.status.success(), "stderr: {}", stderr(output));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn graph_prints_every_label() {
    let feed = feed_file(".yaml", FEED);
    let graph = stdout_json(&run(&["graph"], feed.path()));

    let nodes = graph["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0]["edges"], json!({"2": [1], "3": [2]}));
    assert_eq!(nodes[3]["edges"], json!({}));
}

#[test]
fn stats_with_entry_ids() {
    let feed = feed_file(".yaml", FEED);
    let stats = stdout_json(&run(&["stats", "--recount", "--entry-ids"], feed.path()));

    let flying = &stats[0];
    assert_eq!(flying["name"], json!("flying"));
    assert_eq!(flying["total_connections"], json!(2));
    assert_eq!(flying["all_entry_ids"], json!([1, 2]));

    let plain = stdout_json(&run(&["stats"], feed.path()));
    assert!(plain[0].get("all_entry_ids").is_none());
}

#[test]
fn recount_replaces_feed_frequencies() {
    let feed = feed_file(".yaml", FEED);

    let as_given = stdout_json(&run(&["stats"], feed.path()));
    assert!(as_given
        .as_array()
        .unwrap()
        .iter()
        .all(|s| s["frequency"] == json!(0)));

    let recounted = stdout_json(&run(&["stats", "--recount"], feed.path()));
    let frequencies: Vec<u64> = recounted
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["frequency"].as_u64().unwrap())
        .collect();
    assert_eq!(frequencies, vec![2, 2, 2, 0]);
}

#[test]
fn connections_by_name_and_id() {
    let as_json = serde_yaml::from_str::<Value>(FEED).unwrap().to_string();
    let feed = feed_file(".json", &as_json);

    let by_name = stdout_json(&run(&["connections", "--name", " Flying "], feed.path()));
    let by_id = stdout_json(&run(&["connections", "--label", "1"], feed.path()));
    assert_eq!(by_name, by_id);

    let mut names: Vec<&str> = by_name
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label_name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["lucid", "water"]);

    let isolated = stdout_json(&run(&["connections", "--label", "4"], feed.path()));
    assert_eq!(isolated, json!([]));
}

#[test]
fn unknown_label_fails() {
    let feed = feed_file(".yaml", FEED);

    let by_id = run(&["connections", "--label", "999"], feed.path());
    assert_eq!(by_id.status.code(), Some(1));
    assert!(by_id.stdout.is_empty());
    assert!(stderr(&by_id).contains("label 999 not found"));

    let by_name = run(&["connections", "--name", "nope"], feed.path());
    assert_eq!(by_name.status.code(), Some(1));
    assert!(stderr(&by_name).contains("label 'nope' not found"));
}

#[test]
fn missing_feed_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["graph"], &dir.path().join("absent.yaml"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load feed"));
}

#[test]
fn unsupported_extension_fails() {
    let feed = feed_file(".txt", FEED);
    let output = run(&["stats"], feed.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported feed format"));
}

#[test]
fn length_warnings_need_a_config() {
    let feed = feed_file(".yaml", FEED);

    let plain = run(&["graph"], feed.path());
    assert!(plain.status.success());
    assert!(!stderr(&plain).contains("outside configured length bounds"));

    let config = feed_file(".yaml", "min_label_len: 2\n");
    let checked = run(
        &["graph", "--config", config.path().to_str().unwrap()],
        feed.path(),
    );
    assert!(checked.status.success());
    assert!(stderr(&checked).contains("outside configured length bounds"));
}
