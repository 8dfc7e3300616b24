//! Exit codes and stdout of the flight-stats binary

use pretty_assertions::assert_eq;
use std::fs;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_flight-stats");

const FLIGHTS: &str = concat!(
    r#"{"registration":"D-AIBL","from":"FRA","to":"LIS","scheduled_start":"2023-01-01T10:00:00+00:00","scheduled_end":"2023-01-01T12:00:00+00:00","actual_start":"2023-01-01T10:00:00+00:00","actual_end":"2023-01-01T12:00:00+00:00"}"#,
    "\n",
    r#"{"registration":"G-EUOE","from":"LHR","to":"LIS","scheduled_start":"2023-01-01T20:00:00+00:00","scheduled_end":"2023-01-01T23:00:00+00:00","actual_start":"2023-01-01T21:00:00+00:00","actual_end":"2023-01-02T00:30:00+00:00"}"#,
    "\n",
);

#[test]
fn test_default_path_and_human_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("var")).unwrap();
    fs::write(dir.path().join("var/input.jsonl"), FLIGHTS).unwrap();

    let output = Command::new(BIN)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Top Three Longest Flights:\n\
         Flight: G-EUOE Duration: 210 minutes\n\
         Flight: D-AIBL Duration: 120 minutes\n\
         Airline with Most Missed Landings:\n\
         British Airways\n\
         Destination with Most Overnight Stays:\n\
         LIS\n"
    );
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flights.jsonl");
    fs::write(&input, FLIGHTS).unwrap();

    let output = Command::new(BIN)
        .arg("--input")
        .arg(&input)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["flights_processed"], 2);
    assert_eq!(value["most_overnight_stays"]["name"], "LIS");
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(BIN).current_dir(dir.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("var/input.jsonl"));
}

#[test]
fn test_bad_line_fails_without_partial_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flights.jsonl");
    fs::write(&input, format!("{FLIGHTS}{{\"registration\":\n")).unwrap();

    let output = Command::new(BIN).arg("-i").arg(&input).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 3"));
}
