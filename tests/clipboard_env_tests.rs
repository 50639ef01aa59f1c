use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

use passdesk::store::{Credential, CredentialStore, Database, SqliteCredentialStore};

#[test]
fn get_warns_in_ssh_like_environment() {
    let td = tempdir().unwrap();
    let path = td.path().join("passwords.db");
    {
        let db = Database::open(&path).expect("open db");
        SqliteCredentialStore::new(&db)
            .insert(&Credential::new("srv", "", "u", "p"))
            .expect("seed");
    }

    // Simulate SSH session; do not use --no-copy to exercise clipboard path
    let mut cmd = Command::cargo_bin("passdesk").unwrap();
    cmd.env("PASSDESK_CONFIG_DIR", td.path().join("cfg"))
        .env("SSH_CONNECTION", "1")
        .env("PASSDESK_CLIP_TTL", "0")
        .arg("get")
        .arg("srv")
        .arg("--db")
        .arg(&path);

    // Clipboard failures are warnings, never errors; stdout stays empty without --echo
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Detected SSH session"));
}
