//! Integration tests for the ledgerdesk CLI.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run_ledger(args: &[&str], db: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ledgerdesk"))
        .env("LEDGERDESK_DB", db)
        .args(args)
        .output()
        .expect("Failed to execute ledgerdesk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let status = output.status.code().unwrap_or(1);

    (stdout, stderr, status)
}

#[test]
fn test_employee_roster() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("ledger.db");

    let (stdout, _, status) = run_ledger(
        &[
            "employee", "add", "Amina Khan", "--position", "Clerk", "--salary", "2400",
            "--hired", "2025-03-01",
        ],
        &db,
    );
    assert_eq!(status, 0);
    assert!(stdout.contains("Recorded employee #1: Amina Khan"));

    let (stdout, _, status) = run_ledger(&["employee", "list"], &db);
    assert_eq!(status, 0);
    assert!(stdout.contains("Amina Khan"));
    assert!(stdout.contains("Clerk"));

    let (stdout, _, status) = run_ledger(&["employee", "list", "--json"], &db);
    assert_eq!(status, 0);
    let employees: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(employees.as_array().unwrap().len(), 1);
    assert_eq!(employees[0]["name"], "Amina Khan");
    assert_eq!(employees[0]["active"], true);
}

#[test]
fn test_summary_counts_only_paid_rows() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("ledger.db");

    run_ledger(
        &[
            "employee", "add", "Amina Khan", "--position", "Clerk", "--hired", "2025-03-01",
        ],
        &db,
    );

    run_ledger(
        &[
            "invoice", "add", "INV-001", "--customer", "Acme", "--amount", "1000",
            "--issued", "2026-07-01", "--paid",
        ],
        &db,
    );
    run_ledger(
        &[
            "invoice", "add", "INV-002", "--customer", "Acme", "--amount", "500",
            "--issued", "2026-07-02",
        ],
        &db,
    );
    run_ledger(
        &["expense", "add", "Rent", "--amount", "200", "--spent", "2026-07-03"],
        &db,
    );
    run_ledger(
        &["withdrawal", "add", "100", "--date", "2026-07-04"],
        &db,
    );
    run_ledger(
        &[
            "salary", "add", "1", "--month", "2026-07", "--base", "400",
            "--deductions", "100", "--paid",
        ],
        &db,
    );
    run_ledger(
        &["salary", "add", "1", "--month", "2026-08", "--base", "400"],
        &db,
    );

    let (stdout, _, status) = run_ledger(&["summary"], &db);
    assert_eq!(status, 0);
    assert!(stdout.contains("Income (paid invoices):"));
    assert!(stdout.contains("1000.00"));
    assert!(stdout.contains("200.00"));
    assert!(stdout.contains("100.00"));
    assert!(stdout.contains("300.00"));
    assert!(stdout.contains("400.00"));
}

#[test]
fn test_salary_for_unknown_employee_fails() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("ledger.db");

    let (_, stderr, status) = run_ledger(
        &["salary", "add", "9", "--month", "2026-07", "--base", "400", "--paid"],
        &db,
    );
    assert_ne!(status, 0);
    assert!(stderr.contains("Employee #9 not found"));

    let (stdout, _, _) = run_ledger(&["salary", "list"], &db);
    assert!(stdout.contains("No salary payments on file."));
}

#[test]
fn test_closing_and_statement_listings() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("ledger.db");

    let (stdout, _, status) = run_ledger(
        &["closing", "add", "2026-07-31", "--cash", "1234.56", "--notes", "till short"],
        &db,
    );
    assert_eq!(status, 0);
    assert!(stdout.contains("Recorded closing #1"));

    let (stdout, _, _) = run_ledger(&["closing", "list"], &db);
    assert!(stdout.contains("2026-07-31"));
    assert!(stdout.contains("1234.56"));

    run_ledger(
        &["statement", "add", "bank fee", "--date", "2026-07-31", "--debit", "12.50"],
        &db,
    );

    let (stdout, _, _) = run_ledger(&["statement", "list", "--json"], &db);
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entries[0]["label"], "bank fee");
    assert_eq!(entries[0]["debit"], 12.5);
}

#[test]
fn test_receivable_and_deposit_round_trip() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("ledger.db");

    run_ledger(
        &["receivable", "add", "Bashir & Co", "--amount", "750", "--due", "2026-09-15"],
        &db,
    );
    let (stdout, _, _) = run_ledger(&["receivable", "list"], &db);
    assert!(stdout.contains("Bashir & Co"));
    assert!(stdout.contains("due 2026-09-15"));

    run_ledger(
        &["deposit", "add", "500", "--source", "cash desk", "--date", "2026-07-31"],
        &db,
    );
    let (stdout, _, _) = run_ledger(&["deposit", "list"], &db);
    assert!(stdout.contains("cash desk"));
    assert!(stdout.contains("500.00"));
}
