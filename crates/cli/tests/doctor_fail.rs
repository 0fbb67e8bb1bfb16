use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_explicit_config_missing() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pass2csv"));
    cmd.args(["doctor", "--config"]).arg(tmp.path().join("nope.toml"));
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL pass2csv doctor"))
        .stdout(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_for_unknown_profile_without_config() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pass2csv"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.args(["doctor", "--profile", "work"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL pass2csv doctor"))
        .stdout(predicate::str::contains("profile 'work' not found"))
        .stdout(predicate::str::contains("looked for:"));
}

#[test]
fn doctor_fails_on_invalid_exclusion_pattern() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        r#"
version = 1
[profiles.default]
exclude_patterns = ["(unclosed"]
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pass2csv"));
    cmd.arg("--config").arg(&cfg).arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL pass2csv doctor"))
        .stdout(predicate::str::contains("invalid exclusion pattern '(unclosed'"));
}
