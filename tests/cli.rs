//! End-to-end tests for the mdforge binary

use assert_cmd::Command;
use predicates::prelude::*;

fn mdforge() -> Command {
    Command::cargo_bin("mdforge").unwrap()
}

#[test]
fn renders_csv_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("people.csv");
    std::fs::write(&input, "Name,Score\nAlice,10\nBob,9\n").unwrap();

    mdforge()
        .arg(&input)
        .args(["--title", "Scores"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Scores"))
        .stdout(predicate::str::contains("| Name | Score |"))
        .stdout(predicate::str::contains("| Alice | 10 |"));
}

#[test]
fn sorts_numerically() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("people.csv");
    std::fs::write(&input, "Name,Score\nAlice,10\nBob,9\nCarol,2\n").unwrap();

    mdforge()
        .arg(&input)
        .args(["--sort-by", "Score"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| Carol | 2 |\n| Bob | 9 |\n| Alice | 10 |",
        ));
}

#[test]
fn renders_json_with_flexible_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    std::fs::write(&input, r#"[{"a": 1}, {"a": 2, "b": "x"}]"#).unwrap();

    mdforge()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("| a | b |"))
        .stdout(predicate::str::contains("| 1 |  |"));
}

#[test]
fn writes_output_file_and_respects_existing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("people.csv");
    std::fs::write(&input, "Name,Score\nAlice,10\n").unwrap();
    let output = dir.path().join("out.md");

    mdforge()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("# Report\n"));

    // a second run without --force refuses to clobber the file
    mdforge()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    mdforge()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn rejects_unknown_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.xml");
    std::fs::write(&input, "<rows/>").unwrap();

    mdforge()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));
}
