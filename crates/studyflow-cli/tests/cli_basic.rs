//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a temporary session
//! store and a fixed `--now`, and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against a store file and return output.
fn run_cli(store: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studyflow-cli", "--quiet", "--"])
        .args(["--store", store.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_session_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("sessions.json");

    let (stdout, stderr, code) = run_cli(
        &store,
        &[
            "session",
            "add",
            "Irregular verbs",
            "--start",
            "2025-03-10T09:00",
            "--type-id",
            "grammar",
        ],
    );
    assert_eq!(code, 0, "session add failed: {stderr}");
    assert!(stdout.contains("added"));

    let (stdout, _, code) = run_cli(&store, &["session", "list", "--json"]);
    assert_eq!(code, 0);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    // Grammar default duration applies when --duration is omitted
    assert_eq!(sessions[0]["estimated_minutes"], 45);
}

#[test]
fn test_session_complete() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("sessions.json");

    run_cli(
        &store,
        &[
            "session",
            "add",
            "Flashcards",
            "--start",
            "2025-03-10T10:00",
            "--duration",
            "20",
        ],
    );

    let (stdout, _, _) = run_cli(&store, &["session", "list", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = sessions[0]["id"].as_str().unwrap().to_string();

    let (_, _, code) = run_cli(&store, &["session", "complete", &id]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(&store, &["session", "list", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sessions[0]["completed"], true);
}

#[test]
fn test_agenda_groups_by_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("sessions.json");

    run_cli(
        &store,
        &[
            "session",
            "add",
            "Soon",
            "--start",
            "2025-03-10T15:00",
            "--duration",
            "30",
        ],
    );
    run_cli(
        &store,
        &[
            "session",
            "add",
            "Next day",
            "--start",
            "2025-03-11T09:00",
            "--duration",
            "30",
        ],
    );

    let (stdout, stderr, code) = run_cli(&store, &["--now", "2025-03-10T14:00", "agenda"]);
    assert_eq!(code, 0, "agenda failed: {stderr}");
    assert!(stdout.contains("Next 2 Hours"));
    assert!(stdout.contains("Tomorrow"));
    assert!(stdout.contains("Soon"));
}

#[test]
fn test_slots_json_reports_free_time() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("sessions.json");

    run_cli(
        &store,
        &[
            "session",
            "add",
            "Morning block",
            "--start",
            "2025-03-10T09:00",
            "--duration",
            "60",
        ],
    );

    let (stdout, stderr, code) = run_cli(
        &store,
        &[
            "--now",
            "2025-03-10T00:00",
            "slots",
            "--day",
            "2025-03-10",
            "--duration",
            "30",
            "--json",
        ],
    );
    assert_eq!(code, 0, "slots failed: {stderr}");
    let slots: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 2);
    assert!(slots[0]["start_time"].as_str().unwrap().contains("06:00"));
}

#[test]
fn test_assist_books_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("sessions.json");

    let (stdout, stderr, code) = run_cli(
        &store,
        &[
            "--now",
            "2025-03-10T08:00",
            "assist",
            "review",
            "--title",
            "Review basics",
        ],
    );
    assert_eq!(code, 0, "assist failed: {stderr}");
    assert!(stdout.contains("proposed"));
    assert!(stdout.contains("booked"));

    let (stdout, _, _) = run_cli(&store, &["session", "list", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sessions.as_array().unwrap().len(), 1);
    // Review default duration is 20 minutes
    assert_eq!(sessions[0]["estimated_minutes"], 20);
}

#[test]
fn test_effectiveness_hours() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("sessions.json");

    let (stdout, _, code) = run_cli(&store, &["effectiveness", "hours"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("optimal study hours"));
}
