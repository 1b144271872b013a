use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const HELP: &str = "An expense recording system

Commands:

add AMOUNT MEMO - record a new expense
clear - delete all expenses
list - list all expenses
delete NUMBER - remove expense with id NUMBER
search QUERY - list expenses with a matching memo field
";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_expense"))
}

fn scratch_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = dir.path().join("expense.db");
    (dir, db)
}

fn expense(db: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .env("EXPENSE_DB", db)
        .args(args)
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout.clone()).expect("stdout should be utf-8")
}

/// Run `expense clear` feeding `answer` on stdin.
fn clear_with_input(db: &Path, answer: &str) -> String {
    let mut child = Command::new(bin())
        .env("EXPENSE_DB", db)
        .arg("clear")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("binary should spawn");
    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(answer.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("binary should exit");
    stdout(&output)
}

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

#[test]
fn test_no_command_prints_help() {
    let (_dir, db) = scratch_db();
    assert_eq!(stdout(&expense(&db, &[])), HELP);
}

#[test]
fn test_unknown_command_prints_help() {
    let (_dir, db) = scratch_db();
    assert_eq!(stdout(&expense(&db, &["frobnicate"])), HELP);
}

#[test]
fn test_list_on_empty_table() {
    let (_dir, db) = scratch_db();
    assert_eq!(stdout(&expense(&db, &["list"])), "There are no expenses.\n");
}

#[test]
fn test_add_then_list_single_row_has_no_total() {
    let (_dir, db) = scratch_db();

    assert_eq!(stdout(&expense(&db, &["add", "10.00", "lunch"])), "");

    let expected = format!(
        "There is one expense.\n  1 | {} |        10.00 | lunch\n",
        today()
    );
    assert_eq!(stdout(&expense(&db, &["list"])), expected);
}

#[test]
fn test_list_two_rows_prints_total() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "5.00", "coffee"]);
    expense(&db, &["add", "7.50", "sandwich"]);

    let output = stdout(&expense(&db, &["list"]));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "There are 2 expenses.");
    assert_eq!(lines[3], "-".repeat(50));
    assert_eq!(lines[4], format!("Total {:>25}", "12.50"));
}

#[test]
fn test_add_missing_memo() {
    let (_dir, db) = scratch_db();
    assert_eq!(
        stdout(&expense(&db, &["add", "10.00"])),
        "You must provide an amount and memo.\n"
    );
    assert_eq!(stdout(&expense(&db, &["list"])), "There are no expenses.\n");
}

#[test]
fn test_add_rejects_bad_amounts() {
    let (_dir, db) = scratch_db();

    for amount in ["ten", "-5", "1.234"] {
        let output = stdout(&expense(&db, &["add", amount, "memo"]));
        assert!(
            output.contains("is not a valid amount"),
            "unexpected output for {:?}: {}",
            amount,
            output
        );
    }

    assert_eq!(
        stdout(&expense(&db, &["add", "0.00", "memo"])),
        "The amount must be at least 0.01.\n"
    );
    assert_eq!(stdout(&expense(&db, &["list"])), "There are no expenses.\n");
}

#[test]
fn test_search_filters_case_insensitively() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "12.00", "Lunch with Bob"]);
    expense(&db, &["add", "30.00", "Dinner"]);

    let output = stdout(&expense(&db, &["search", "lunch"]));
    assert!(output.starts_with("There is one expense.\n"));
    assert!(output.contains("Lunch with Bob"));
    assert!(!output.contains("Dinner"));
}

#[test]
fn test_search_missing_query() {
    let (_dir, db) = scratch_db();
    assert_eq!(
        stdout(&expense(&db, &["search"])),
        "You must provide a memo.\n"
    );
}

#[test]
fn test_delete_existing_prints_the_row_once() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "3.25", "bagel"]);

    let output = stdout(&expense(&db, &["delete", "1"]));
    let expected = format!(
        "The following expense has been deleted:\n  1 | {} |         3.25 | bagel\n",
        today()
    );
    assert_eq!(output, expected);
    assert_eq!(stdout(&expense(&db, &["list"])), "There are no expenses.\n");
}

#[test]
fn test_delete_unknown_id() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "3.25", "bagel"]);

    assert_eq!(
        stdout(&expense(&db, &["delete", "42"])),
        "There is no expense with id '42'.\n"
    );
    let output = stdout(&expense(&db, &["list"]));
    assert!(output.starts_with("There is one expense.\n"));
}

#[test]
fn test_delete_missing_and_invalid_id() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "3.25", "bagel"]);

    assert_eq!(
        stdout(&expense(&db, &["delete"])),
        "You must provide an expense ID.\n"
    );
    assert_eq!(
        stdout(&expense(&db, &["delete", "bagel"])),
        "'bagel' is not a valid expense ID.\n"
    );
    let output = stdout(&expense(&db, &["list"]));
    assert!(output.starts_with("There is one expense.\n"));
}

#[test]
fn test_clear_declined_keeps_rows() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "1.00", "keep me"]);

    let output = clear_with_input(&db, "n\n");
    assert_eq!(
        output,
        "This will remove all expenses. Are you sure? (enter y to confirm)\n"
    );
    let listing = stdout(&expense(&db, &["list"]));
    assert!(listing.contains("keep me"));
}

#[test]
fn test_clear_confirmed_deletes_everything() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "1.00", "one"]);
    expense(&db, &["add", "2.00", "two"]);

    // Uppercase Y counts as confirmation.
    let output = clear_with_input(&db, "Y\n");
    assert!(output.ends_with("All expenses have been deleted.\n"));
    assert_eq!(stdout(&expense(&db, &["list"])), "There are no expenses.\n");
}

#[test]
fn test_clear_force_skips_the_prompt() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "1.00", "one"]);

    assert_eq!(
        stdout(&expense(&db, &["clear", "--force"])),
        "All expenses have been deleted.\n"
    );
}

#[test]
fn test_list_json_output() {
    let (_dir, db) = scratch_db();

    expense(&db, &["add", "10.50", "lunch"]);

    let output = stdout(&expense(&db, &["list", "--json"]));
    let values: serde_json::Value =
        serde_json::from_str(&output).expect("output should be valid JSON");
    assert_eq!(values[0]["amount"], "10.50");
    assert_eq!(values[0]["memo"], "lunch");
}
