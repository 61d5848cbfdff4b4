//! End-to-end rendering from local fixture documents.
//!
//! Drives the binary with `--file` so no network access is needed. The
//! fixture mirrors the markup shape of a published Google Doc: cells wrapped
//! in `<p><span>`, `&nbsp;` padding, one undecodable row, and a trailing
//! second table that must be ignored.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn gridfetch() -> Command {
    Command::cargo_bin("gridfetch").expect("binary 'gridfetch' should be built")
}

#[test]
fn renders_fixture_as_banner_delimited_grid() {
    // Fixture points: an L of X glyphs with corners (0,0)..(2,0) and (0,2)
    gridfetch()
        .args(["--file", "tests/fixtures/coords.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RENDERED ASCII ART"))
        .stdout(predicate::str::contains("X  \nX  \nXXX"));
}

#[test]
fn skipped_row_does_not_stretch_the_grid() {
    // The undecodable row claims y=9; a 3-line grid proves it was dropped
    // before the bounds computation.
    let output = gridfetch()
        .args(["--file", "tests/fixtures/coords.html"])
        .output()
        .expect("binary should run");
    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    let grid: Vec<&str> = stdout
        .lines()
        .filter(|line| line.contains('X'))
        .collect();
    assert_eq!(grid, vec!["X  ", "X  ", "XXX"]);
}

#[test]
fn second_table_is_ignored() {
    gridfetch()
        .args(["--file", "tests/fixtures/coords.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q").not());
}

#[test]
fn document_without_table_reports_no_data() {
    gridfetch()
        .args(["--file", "tests/fixtures/no_table.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid coordinate data found."));
}

#[test]
fn output_flag_writes_grid_to_file() {
    let path = std::env::temp_dir().join("gridfetch-render-test.txt");
    gridfetch()
        .args(["--file", "tests/fixtures/coords.html", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let art = std::fs::read_to_string(&path).expect("output file should exist");
    assert_eq!(art, "X  \nX  \nXXX");
    let _ = std::fs::remove_file(&path);
}
