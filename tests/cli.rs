//! End-to-end tests driving the compiled binary against a temp data dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", dir.path());
    cmd
}

fn add(dir: &TempDir, date: &str, category: &str, desc: &str, amount: &str) {
    spendlog(dir)
        .args([
            "add", "--date", date, "--category", category, "--desc", desc, "--amount", amount,
        ])
        .assert()
        .success();
}

#[test]
fn add_then_list_shows_the_expense() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "add",
            "--date",
            "2024-03-05",
            "--category",
            "Housing",
            "--desc",
            "march rent",
            "--amount",
            "950.00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense 1 added."));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Housing")
                .and(predicate::str::contains("march rent"))
                .and(predicate::str::contains("2024-03-05")),
        );
}

#[test]
fn list_with_no_data_reports_empty() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn delete_missing_id_reports_not_found_without_failing() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["delete", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense found with ID 42"));
}

#[test]
fn edit_updates_the_record() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-03-05", "Housing", "rent", "950");

    spendlog(&dir)
        .args(["edit", "1", "--amount", "975", "--desc", "april rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense 1 updated."));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("april rent").and(predicate::str::contains("975")));
}

#[test]
fn edit_with_invalid_category_reports_the_valid_set() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-03-05", "Housing", "rent", "950");

    spendlog(&dir)
        .args(["edit", "1", "--category", "food"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid category: 'Food'")
                .and(predicate::str::contains("Sustenance")),
        );

    // The record is untouched
    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn edit_with_bad_date_warns_and_keeps_the_date() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-03-05", "Housing", "rent", "950");

    spendlog(&dir)
        .args(["edit", "1", "--date", "05/03/2024"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Date left unchanged.")
                .and(predicate::str::contains("Expense 1 updated.")),
        );

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-05"));
}

#[test]
fn filter_by_amount_compares_whole_units() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-10", "Shopping", "headphones", "19.99");
    add(&dir, "2024-01-11", "Shopping", "socks", "9.99");

    spendlog(&dir)
        .args(["filter", "-a", "10", "20"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("headphones").and(predicate::str::contains("socks").not()),
        );
}

#[test]
fn filter_by_month_range_is_leap_year_aware() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-02-29", "Travel", "leap day trip", "120");

    spendlog(&dir)
        .args(["filter", "-d", "2024-02", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("leap day trip"));
}

#[test]
fn filter_without_a_mode_prints_usage_hint() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provide at least one filter"));
}

#[test]
fn summary_by_category_totals_the_matching_year() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024-01-15", "Housing", "rent", "100");
    add(&dir, "2023-12-20", "Housing", "rent", "50");
    add(&dir, "2024-01-10", "Bills", "power", "10");

    spendlog(&dir)
        .args(["summary", "-c", "housing", "-y", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent on Housing in 2024: 100.00"));
}

#[test]
fn summary_with_invalid_month_reports_without_failing() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["summary", "-m", "13", "-y", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid month: 13"));
}

#[test]
fn corrupt_expense_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("expenses.json"), "{{{ not json").unwrap();

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));

    // Adding starts over from id 1
    add(&dir, "2024-03-05", "Housing", "rent", "950");
    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rent"));
}
