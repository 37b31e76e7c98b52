//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const QUIZ_STATE: &str = r#"{
    "courses": [{
        "id": "c1",
        "code": "CS 101",
        "name": "Intro",
        "marks": [{
            "id": "m1",
            "name": "Quiz",
            "score": 80.0,
            "max_score": 100.0,
            "weightage": 20.0,
            "percentage": 80.0,
            "weighted": 16.0
        }]
    }]
}"#;

/// A gradebook command isolated inside `dir`.
fn gradebook(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("GRADEBOOK_STATE_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn quiz_state(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("state.json");
    std::fs::write(&path, QUIZ_STATE).unwrap();
    path
}

fn load_state(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Course and weighted mark tracker"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradebook"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created gradebook.toml"));
    assert!(dir.path().join("gradebook.toml").exists());

    gradebook(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn seed_writes_state_file() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .args(["seed", "--courses", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 2 course(s)"));

    let state = load_state(&dir.path().join("gradebook.json"));
    let courses = state["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 2);
    for course in courses {
        assert_eq!(course["marks"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn show_table_and_markdown() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("CS 101 Intro [c1]"))
        .stdout(predicate::str::contains("Total Weighted: 16.00"));

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["show", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| CS 101 | Intro | 1 | 20.00 | 16.00 |"));
}

#[test]
fn show_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .args(["show", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn mark_updates_follow_weightage_then_max_score() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "update", "--course", "c1", "--id", "m1", "--weightage", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 80.00% x 30.00 weightage = 24.00 weighted"))
        .stdout(predicate::str::contains("Total Weighted: 24.00"));

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "update", "--course", "c1", "--id", "m1", "--max-score", "160"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= 50.00% x 30.00 weightage = 15.00 weighted"))
        .stdout(predicate::str::contains("Total Weightage: 30.00"))
        .stdout(predicate::str::contains("Total Weighted: 15.00"));
}

#[test]
fn zero_max_score_is_rejected_and_state_kept() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "update", "--course", "c1", "--id", "m1", "--max-score", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["total", "--course", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Weighted: 16.00"));
}

#[test]
fn overflowing_max_score_is_rejected_and_state_reloads() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "update", "--course", "c1", "--id", "m1", "--max-score", "1e-39"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("percentage is out of range"));

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "update", "--course", "c1", "--id", "m1", "--score", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Weighted: 18.00"));

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_score\": 100.0"));
}

#[test]
fn unparseable_score_is_rejected() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "update", "--course", "c1", "--id", "m1", "--score", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn empty_fields_are_no_change() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "update", "--course", "c1", "--id", "m1", "--score", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to update."));
}

#[test]
fn unknown_ids_are_not_found() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["total", "--course", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("course not found: nope"));

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "remove", "--course", "c1", "--id", "zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mark not found: zz"));
}

#[test]
fn mark_add_and_remove() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "add", "--course", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to course c1"));

    let json = load_state(&state);
    let marks = json["courses"][0]["marks"].as_array().unwrap();
    assert_eq!(marks.len(), 2);
    let total: f64 = marks.iter().map(|m| m["weightage"].as_f64().unwrap()).sum();
    let stored = json["courses"][0]["total_weightage"].as_f64().unwrap();
    assert!((total - stored).abs() < 1e-3);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["mark", "remove", "--course", "c1", "--id", "m1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed mark m1"));

    let json = load_state(&state);
    assert_eq!(json["courses"][0]["marks"].as_array().unwrap().len(), 1);
}

#[test]
fn course_add_update_remove() {
    let dir = TempDir::new().unwrap();
    let state = quiz_state(&dir);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["course", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added course"));
    assert_eq!(load_state(&state)["courses"].as_array().unwrap().len(), 2);

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["course", "update", "--id", "c1", "--code", "MA 201", "--name", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated course c1: MA 201 Intro"));

    gradebook(dir.path())
        .arg("--state")
        .arg(&state)
        .args(["course", "remove", "--id", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed course c1 (MA 201)"));

    let json = load_state(&state);
    let courses = json["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_ne!(courses[0]["id"], "c1");
}

#[test]
fn config_controls_decimals_and_state_file() {
    let dir = TempDir::new().unwrap();
    quiz_state(&dir);
    std::fs::write(
        dir.path().join("gradebook.toml"),
        "state_file = \"state.json\"\ndecimals = 1\n",
    )
    .unwrap();

    gradebook(dir.path())
        .args(["total", "--course", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Weightage: 20.0\n"))
        .stdout(predicate::str::contains("Total Weighted: 16.0\n"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    gradebook(dir.path())
        .args(["--config", "nope.toml", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
