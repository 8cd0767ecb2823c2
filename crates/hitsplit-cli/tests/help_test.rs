use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn hitsplit() -> Command {
    Command::cargo_bin("hitsplit").unwrap()
}

#[test]
fn test_help_mentions_input_conventions() {
    hitsplit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains(".gz"));
}

#[test]
fn test_invalid_log_level_rejected() {
    hitsplit()
        .args(["--log-level", "loud", "x.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("loud"));
}
