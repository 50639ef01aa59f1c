use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn passdesk_version_reports_build_metadata() {
    let mut cmd = Command::cargo_bin("passdesk").unwrap();
    cmd.arg("--version");
    // Clap prints the long_version when --version is used
    cmd.assert().success().stdout(
        predicate::str::contains("version:")
            .and(predicate::str::contains("git sha:"))
            .and(predicate::str::contains("build time (UTC):"))
            .and(predicate::str::contains("target:")),
    );
}
