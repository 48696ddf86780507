use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn taskdesk(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskdesk").unwrap();
    cmd.env("TASKDESK_DB", temp.path().join("tasks.db"));
    cmd
}

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();

    taskdesk(&temp)
        .args(["add", "Buy milk", "--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task #1: Buy milk"));

    taskdesk(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("(High)"));
}

#[test]
fn test_status_lifecycle() {
    let temp = TempDir::new().unwrap();

    taskdesk(&temp).args(["add", "Write report"]).assert().success();

    taskdesk(&temp)
        .args(["status", "1", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task #1 is now In Progress"));

    taskdesk(&temp)
        .args(["status", "1", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task #1 is now Completed"));

    taskdesk(&temp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:       1"))
        .stdout(predicate::str::contains("Completion:  100.0%"));
}

#[test]
fn test_delete_removes_task() {
    let temp = TempDir::new().unwrap();

    taskdesk(&temp).args(["add", "Throwaway"]).assert().success();

    taskdesk(&temp)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task #1"));

    taskdesk(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet."));
}

#[test]
fn test_status_on_missing_task_fails() {
    let temp = TempDir::new().unwrap();

    taskdesk(&temp)
        .args(["status", "99", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task #99 not found"));
}

#[test]
fn test_categories_are_seeded() {
    let temp = TempDir::new().unwrap();

    taskdesk(&temp)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Work"))
        .stdout(predicate::str::contains("Learning"));
}

#[test]
fn test_list_json_output() {
    let temp = TempDir::new().unwrap();

    taskdesk(&temp)
        .args(["add", "Buy milk", "--due", "2026-09-01"])
        .assert()
        .success();

    let output = taskdesk(&temp).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let tasks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["title"], "Buy milk");
    assert_eq!(tasks[0]["status"], "Pending");
    assert_eq!(tasks[0]["due_date"], "2026-09-01");
}
