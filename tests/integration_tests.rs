use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn single_argument_mode_prints_minimized_expression() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.arg("A & B | A & !B");
    cmd.assert().success().stdout(predicate::eq("A\n"));
}

#[test]
fn single_argument_mode_reports_invalid_input() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.arg("a & $ b");
    cmd.assert()
        .success()
        .stdout(predicate::eq("Error: Invalid input\n"));
}

#[test]
fn tautology_scenario_renders_one() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.arg("(A | B) & (A | C) => (B ^ C)");
    cmd.assert().success().stdout(predicate::eq("1\n"));
}

#[test]
fn unsatisfiable_scenario_renders_zero() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.arg("A & 0");
    cmd.assert().success().stdout(predicate::eq("0\n"));
}

#[test]
fn show_steps_prints_trace_after_result() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.arg("A & B").arg("--show-steps");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("A & B\n"))
        .stdout(predicate::str::contains("lexed"));
}

#[test]
fn input_file_reads_expression_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "a => b").unwrap();

    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.arg("--input-file").arg(file.path());
    cmd.assert().success().stdout(predicate::eq("!a | b\n"));
}

#[test]
fn missing_input_file_is_an_unrecoverable_error() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.arg("--input-file").arg("/no/such/path/exists.txt");
    cmd.assert().failure();
}

#[test]
fn repl_mode_prompts_and_reads_from_stdin() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.write_stdin("A | !A\nA & 0\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Expr: "))
        .stdout(predicate::str::contains("1"))
        .stdout(predicate::str::contains("0"));
}

#[test]
fn repl_mode_terminates_cleanly_on_eof() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.write_stdin("");
    cmd.assert().success();
}

#[test]
fn repl_mode_reports_invalid_input_on_blank_line() {
    let mut cmd = Command::cargo_bin("boolmin").unwrap();
    cmd.write_stdin("\nA & 0\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid input"));
}
