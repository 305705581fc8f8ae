//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn teenwise() -> Command {
    let mut cmd = Command::cargo_bin("teenwise").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("TEENWISE_BIND")
        .env_remove("RUST_LOG")
        .current_dir(env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn test_help_lists_commands() {
    teenwise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    teenwise()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--cors-permissive"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_requires_database_url() {
    teenwise()
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    teenwise()
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
