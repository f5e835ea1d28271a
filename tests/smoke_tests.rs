use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_batch_files"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("batch_files"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_batch_files"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_source_and_dest() {
    Command::new(env!("CARGO_BIN_EXE_batch_files"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
