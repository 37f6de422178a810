//! Integration tests for the debt payoff CLI.
//!
//! These tests run the actual binary and verify output against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_payoff(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    let assert = cmd.env_remove("PAYOFF_MAX_MONTHS").args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Normalize CSV for comparison (trim whitespace, drop blank lines).
///
/// Row order is part of the contract, so lines are not sorted.
fn normalize_csv(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

fn assert_output_matches(args: &[&str], expected_file: &str) {
    let output = run_payoff(args);
    let expected = fs::read_to_string(test_data_path(expected_file)).unwrap();
    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_sample_a_schedule_zero_rate() {
    assert_output_matches(&[&test_data_path("sample_a.csv")], "expected_a_schedule.csv");
}

#[test]
fn test_sample_a_summary_zero_rate() {
    assert_output_matches(
        &[&test_data_path("sample_a.csv"), "--summary"],
        "expected_a_summary.csv",
    );
}

#[test]
fn test_sample_b_schedule_with_interest() {
    assert_output_matches(
        &[&test_data_path("sample_b_interest.csv")],
        "expected_b_schedule.csv",
    );
}

#[test]
fn test_sample_b_summary_with_interest() {
    assert_output_matches(
        &["--summary", &test_data_path("sample_b_interest.csv")],
        "expected_b_summary.csv",
    );
}

#[test]
fn test_sample_c_redistribution_and_whitespace() {
    assert_output_matches(
        &[&test_data_path("sample_c_whitespace.csv")],
        "expected_c_schedule.csv",
    );
    assert_output_matches(
        &[&test_data_path("sample_c_whitespace.csv"), "--summary"],
        "expected_c_summary.csv",
    );
}

#[test]
fn test_non_amortizing_payment_fails() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.arg(test_data_path("sample_d_non_amortizing.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("stuck")
                .and(predicate::str::contains("does not exceed interest")),
        );
}

#[test]
fn test_invalid_account_fails() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.arg(test_data_path("sample_e_invalid.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for account 'bad'"));
}

#[test]
fn test_empty_portfolio_fails() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.arg(test_data_path("sample_f_empty.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No accounts to simulate"));
}

#[test]
fn test_month_limit_from_environment() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.env("PAYOFF_MAX_MONTHS", "3")
        .arg(test_data_path("sample_a.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsettled after 3 months"));
}

#[test]
fn test_invalid_month_limit_fails() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.env("PAYOFF_MAX_MONTHS", "never")
        .arg(test_data_path("sample_a.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_unknown_flag_error() {
    let mut cmd = Command::cargo_bin("debt-payoff").unwrap();
    cmd.args([test_data_path("sample_a.csv").as_str(), "--avalanche"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown argument '--avalanche'"));
}

#[test]
fn test_temp_file_input() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "account,balance,apr,payment").unwrap();
    writeln!(file, "Visa,0,19.99,25").unwrap();
    writeln!(file, "Store,45,0,15").unwrap();

    let output = run_payoff(&[file.path().to_str().unwrap(), "--summary"]);
    assert_eq!(
        normalize_csv(&output),
        vec![
            "account,months_to_payoff,payment,total_interest",
            "Visa,1,25.0000,0.0000",
            "Store,4,15.0000,0.0000",
            "total,,,0.0000",
        ]
    );
}

#[test]
fn test_output_has_correct_header() {
    let output = run_payoff(&[&test_data_path("sample_b_interest.csv")]);
    assert!(output.starts_with("account,month,interest,payment,balance"));
}

#[test]
fn test_decimal_precision_four_places() {
    let output = run_payoff(&[&test_data_path("sample_b_interest.csv")]);

    for line in output.lines().skip(1) {
        let parts: Vec<&str> = line.split(',').collect();
        assert_eq!(parts.len(), 5);
        for part in &parts[2..5] {
            let dot_pos = part.find('.').expect("monetary value has a decimal point");
            assert_eq!(part.len() - dot_pos - 1, 4, "Expected 4 decimal places in: {}", part);
        }
    }
}
