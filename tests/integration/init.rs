//! Integration tests for the init command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stategen() -> Command {
    Command::cargo_bin("stategen").unwrap()
}

#[test]
fn test_init_creates_manifest() {
    let dir = TempDir::new().unwrap();

    stategen()
        .arg("init")
        .arg("--path")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("stategen.toml"));

    let content = fs::read_to_string(dir.path().join("stategen.toml")).unwrap();
    assert!(content.contains("[generator]"));
    assert!(content.contains("package-name"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stategen.toml"), "# existing\n").unwrap();

    stategen()
        .arg("init")
        .arg("--path")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    stategen().arg("init").arg("--force").arg("--path").arg(dir.path()).assert().success();
    let content = fs::read_to_string(dir.path().join("stategen.toml")).unwrap();
    assert!(content.contains("[generator]"));
}
