//! Integration tests for the strata binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn strata(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("strata").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn init_creates_config_and_migrations_dir() {
    let dir = tempfile::tempdir().unwrap();

    strata(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(dir.path().join("strata.toml").exists());
    assert!(dir.path().join("strata/migrations").is_dir());
}

#[test]
fn init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();

    strata(dir.path()).arg("init").assert().success();
    strata(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_creates_prefixed_migration() {
    let dir = tempfile::tempdir().unwrap();

    strata(dir.path()).arg("init").assert().success();
    strata(dir.path())
        .args(["new", "create_place"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0001_create_place.sql"));

    let path = dir.path().join("strata/migrations/0001_create_place.sql");
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.contains("create_place"));
}

#[test]
fn status_lists_migrations_in_order() {
    let dir = tempfile::tempdir().unwrap();

    strata(dir.path()).arg("init").assert().success();
    strata(dir.path()).args(["new", "one"]).assert().success();
    strata(dir.path()).args(["new", "two"]).assert().success();

    strata(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("0001_one\n0002_two"));
}

#[test]
fn status_without_migrations_warns() {
    let dir = tempfile::tempdir().unwrap();

    strata(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No migrations found"));
}
