#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn cli() -> Command {
    Command::cargo_bin("xml-report-check").unwrap()
}

#[test]
fn test_equivalent_reports() {
    cli()
        .arg(fixture("expected_report.xml"))
        .arg(fixture("actual_report.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("equivalent"));
}

#[test]
fn test_mismatched_reports() {
    cli()
        .arg(fixture("expected_report.xml"))
        .arg(fixture("mismatched_report.xml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("reports are not equivalent"))
        .stderr(predicate::str::contains("CDATA mismatch"));
}

#[test]
fn test_raw_skips_normalization() {
    cli()
        .arg("--raw")
        .arg(fixture("expected_report.xml"))
        .arg(fixture("actual_report.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not numeric"));
}

#[test]
fn test_missing_child_message() {
    let dir = tempdir().unwrap();
    let expected = dir.path().join("expected.xml");
    let actual = dir.path().join("actual.xml");
    fs::write(
        &expected,
        r#"<testsuite name="S" time="*"><testcase name="A" time="*"/><testcase name="B" time="*"/></testsuite>"#,
    )
    .unwrap();
    fs::write(
        &actual,
        r#"<testsuite name="S" time="0.3"><testcase name="A" time="0.1"/></testsuite>"#,
    )
    .unwrap();

    cli()
        .arg(&expected)
        .arg(&actual)
        .assert()
        .failure()
        .stderr(predicate::str::contains("<B> is not in <A>"));
}

#[test]
fn test_unreadable_input() {
    let dir = tempdir().unwrap();
    cli()
        .arg(fixture("expected_report.xml"))
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
