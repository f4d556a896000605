//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::backfill_cmd;

#[test]
fn test_config_list_defaults() {
    let temp = TempDir::new().unwrap();

    backfill_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dialect = bash"))
        .stdout(predicate::str::contains("remote_host = git@github.com"))
        .stdout(predicate::str::contains("output = backfill.sh"));

    // Listing never creates the file
    assert!(!temp.path().join("backfill.toml").exists());
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();

    backfill_cmd()
        .current_dir(temp.path())
        .args(["config", "dialect", "sh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set dialect = sh"));

    backfill_cmd()
        .current_dir(temp.path())
        .args(["config", "dialect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sh"));

    let content = fs::read_to_string(temp.path().join("backfill.toml")).unwrap();
    assert!(content.contains("dialect = \"sh\""));
}

#[test]
fn test_config_explicit_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");

    backfill_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "username", "octocat"])
        .assert()
        .success();

    assert!(path.exists());
    assert!(!temp.path().join("backfill.toml").exists());
}

#[test]
fn test_config_env_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env.toml");

    backfill_cmd()
        .current_dir(temp.path())
        .env("BACKFILL_CONFIG", &path)
        .args(["config", "output", "paint.sh"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("output = \"paint.sh\""));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    backfill_cmd()
        .current_dir(temp.path())
        .args(["config", "editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'editor'"));
}

#[test]
fn test_config_invalid_dialect_fails() {
    let temp = TempDir::new().unwrap();

    backfill_cmd()
        .current_dir(temp.path())
        .args(["config", "dialect", "fish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid dialects: bash, sh"));
}

#[test]
fn test_username_from_config_used_by_generate() {
    let temp = TempDir::new().unwrap();

    backfill_cmd()
        .current_dir(temp.path())
        .args(["config", "username", "monalisa"])
        .assert()
        .success();

    backfill_cmd()
        .current_dir(temp.path())
        .args([
            "generate", "--repo", "history", "--start", "2024-01-01", "--end", "2024-01-08",
            "--lightest", "1", "--print",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("git@github.com:monalisa/$REPO.git"));
}
