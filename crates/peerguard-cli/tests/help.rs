use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the peerguard binary.
#[allow(deprecated)]
fn peerguard_cmd() -> Command {
    Command::cargo_bin("peerguard").unwrap()
}

#[test]
fn help_works() {
    peerguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target <MAJOR>"))
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("peerguard --target 17"));
}

#[test]
fn short_help_works() {
    peerguard_cmd().arg("-h").assert().success();
}

#[test]
fn version_works() {
    peerguard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
