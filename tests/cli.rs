//! End-to-end tests for the lsfilter binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lsfilter() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("lsfilter").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn stdout_names(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().last().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_lists_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a"), "1").unwrap();
    fs::write(tmp.path().join("b"), "22").unwrap();

    let output = lsfilter().arg(tmp.path()).assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.starts_with("PERMISSIONS: TYPE: I-NODE:"), "{text}");

    let mut names = stdout_names(&output);
    names.sort();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_defaults_to_current_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("here.txt"), "x").unwrap();

    lsfilter()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("here.txt"));
}

#[test]
fn test_larger_than() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("small.bin"), vec![0u8; 500]).unwrap();
    fs::write(tmp.path().join("big.bin"), vec![0u8; 2000]).unwrap();

    let output = lsfilter()
        .args(["-l", "1000"])
        .arg(tmp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_names(&output), vec!["big.bin"]);
}

#[test]
fn test_younger_and_older_together_is_empty() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("f"), "x").unwrap();

    let output = lsfilter()
        .args(["-y", "1", "-o", "1"])
        .arg(tmp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8_lossy(&output).lines().count(), 1);
}

#[test]
fn test_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    lsfilter()
        .arg(tmp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("FILE_NAME").not())
        .stderr(predicate::str::contains("cannot open directory"));
}

#[test]
fn test_missing_option_argument_fails() {
    lsfilter().arg("-y").assert().failure().code(2);
}

#[test]
fn test_unknown_option_fails() {
    lsfilter()
        .args(["-q", "1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_path_too_long_fails() {
    let long = "x".repeat(5000);
    lsfilter()
        .arg(long)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("too long"));
}
