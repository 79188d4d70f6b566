//! Error-path integration tests: exit codes and user-facing messages.

use assert_cmd::Command;
use predicates::prelude::*;

fn herald() -> Command {
    let mut cmd = Command::cargo_bin("herald").unwrap();
    cmd.env_remove("HERALD_OUTPUT__COLUMNS")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", "/nonexistent-herald-config");
    cmd
}

#[test]
fn no_arguments_shows_help_and_fails() {
    herald()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_preset_exits_not_found() {
    herald()
        .args(["banner", "TEST", "--preset", "neon"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("neon"))
        .stderr(predicate::str::contains("title"));
}

#[test]
fn non_numeric_columns_is_a_parse_error() {
    herald()
        .args(["banner", "TEST", "--columns", "eighty"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("eighty"));
}

#[test]
fn unknown_justify_mode_is_a_parse_error() {
    herald()
        .args(["banner", "TEST", "--justify", "diagonal"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("diagonal"));
}

#[test]
fn unknown_message_kind_is_a_parse_error() {
    herald()
        .args(["say", "hi", "--kind", "shout"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("shout"));
}

#[test]
fn missing_explicit_config_file_exits_configuration() {
    herald()
        .args(["--config", "/definitely/not/here.toml", "hr"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn config_init_twice_requires_force() {
    let dir = tempfile::tempdir().unwrap();

    herald()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    herald()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    herald()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn quiet_conflicts_with_verbose() {
    herald()
        .args(["hr", "--quiet", "-v"])
        .assert()
        .failure()
        .code(2);
}
