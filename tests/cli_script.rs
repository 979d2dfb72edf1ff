use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;
use tempfile::tempdir;

fn shell(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("spendlens_cli").unwrap();
    cmd.env("SPENDLENS_CLI_SCRIPT", "1")
        .env("SPENDLENS_HOME", home)
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = tempdir().unwrap();
    let input = "\
add Food 100 2024-03-02 lunch
add Travel 30.5 2024-04-11 \"airport cab\"
list
chart
set-budget 500
budget 2024-03
month 2024-04
delete 1
clear-filters
list
exit
";

    let assert = shell(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added expense: Food ₹100.00 on 3/2/2024"))
        .stdout(contains("Spending by category"))
        .stdout(contains("Total expenses: ₹130.50"))
        .stdout(contains("Monthly budget set to ₹500.00."))
        .stdout(contains("Under limit - ₹400.00 remaining"))
        .stdout(contains("Deleted expense: Travel ₹30.50 on 4/11/2024"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let total_row = Regex::new(r"Total\s+₹130\.50").unwrap();
    assert!(total_row.is_match(&stdout), "{stdout}");

    let raw = fs::read_to_string(home.path().join("data").join("spendlens_expenses.json")).unwrap();
    assert!(raw.contains("\"Food\""));
    assert!(!raw.contains("\"Travel\""));
    let budget = fs::read_to_string(home.path().join("data").join("spendlens_budget.json")).unwrap();
    assert_eq!(budget, "500");
    assert!(home.path().join("config.json").exists());
}

#[test]
fn ledger_persists_between_runs() {
    let home = tempdir().unwrap();

    shell(home.path())
        .write_stdin("add Rent 900 2024-01-05\nadd Bills 45 2024-02-10\n")
        .assert()
        .success();

    shell(home.path())
        .write_stdin("months\ncategories\n")
        .assert()
        .success()
        .stdout(contains("January 2024"))
        .stdout(contains("February 2024"))
        .stdout(contains("Bills"));
}

#[test]
fn errors_are_reported_and_the_shell_continues() {
    let home = tempdir().unwrap();

    shell(home.path())
        .write_stdin("add Food zero\nlst\nadd Food 12 2024-03-01\n")
        .assert()
        .success()
        .stdout(contains("Invalid amount"))
        .stdout(contains("Did you mean `list`?"))
        .stdout(contains("Added expense: Food ₹12.00"))
        .stdout(contains("Total").not());
}
