//! Exit code contract, checked through `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn snippets(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snippets").expect("binary should build");
    cmd.env_remove("SNIPPETS_FORMAT")
        .env_remove("SNIPPETS_CONFIG")
        .env_remove("RUST_LOG")
        .env("SNIPPETS_DB", dir.path().join("snippets.db"))
        .env("SNIPPETS_LOG_FILE", dir.path().join("snippets.log"));
    cmd
}

#[test]
fn missing_snippet_exits_zero() {
    let dir = TempDir::new().unwrap();

    snippets(&dir)
        .args(["get", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet not found"));
    snippets(&dir)
        .args(["delete", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not stored"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    snippets(&dir).arg("frobnicate").assert().code(2);
}

#[test]
fn hide_and_show_conflict() {
    let dir = TempDir::new().unwrap();
    snippets(&dir)
        .args(["put", "alpha", "body", "--hide", "--show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn put_requires_both_arguments() {
    let dir = TempDir::new().unwrap();
    snippets(&dir).args(["put", "alpha"]).assert().code(2);
}

#[test]
fn empty_keyword_exits_one() {
    let dir = TempDir::new().unwrap();
    snippets(&dir)
        .args(["put", "  ", "body"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn missing_config_file_exits_one() {
    let dir = TempDir::new().unwrap();
    snippets(&dir)
        .args(["--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("catalog")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn malformed_config_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "colour = \"blue\"\n").unwrap();

    snippets(&dir)
        .arg("--config")
        .arg(&config)
        .arg("catalog")
        .assert()
        .code(1);
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    snippets(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snippets"));
}
