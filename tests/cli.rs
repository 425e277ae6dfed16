// ABOUTME: Integration tests for the stevedore CLI commands.
// ABOUTME: Validates --help output and init command behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn stevedore_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stevedore"))
}

#[test]
fn help_shows_commands() {
    stevedore_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("stevedore.yml");

    stevedore_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "stevedore.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("listen:"), "config should have listen section");
    assert!(content.contains("engine:"), "config should have engine section");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("stevedore.yml");

    fs::write(&config_path, "existing: config").unwrap();

    stevedore_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("stevedore.yml");

    fs::write(&config_path, "existing: config").unwrap();

    stevedore_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&config_path).unwrap().contains("listen:"));
}
