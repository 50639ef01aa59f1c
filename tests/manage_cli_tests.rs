use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn passdesk(td: &Path, db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("passdesk").unwrap();
    cmd.env("PASSDESK_CONFIG_DIR", td.join("cfg"))
        .env_remove("PASSDESK_DB_PATH")
        .env_remove("PASSDESK_ALLOW_DUPLICATES")
        .arg("--db")
        .arg(db);
    cmd
}

fn add(td: &Path, db: &Path, service: &str, password: &str) {
    passdesk(td, db)
        .args(["add", "--service", service, "--password", password])
        .args(["--url", "https://example.com", "--login", "me"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Entry '{service}' saved")));
}

#[test]
fn add_then_show_masks_password_until_revealed() {
    let td = tempdir().unwrap();
    let db = td.path().join("passwords.db");
    add(td.path(), &db, "github", "s3cret");

    passdesk(td.path(), &db)
        .args(["show", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL:      https://example.com"))
        .stdout(predicate::str::contains("Login:    me"))
        .stdout(predicate::str::contains("s3cret").not());

    passdesk(td.path(), &db)
        .args(["show", "github", "--reveal-password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password: s3cret"));
}

#[test]
fn add_trims_fields_and_rejects_blank_service() {
    let td = tempdir().unwrap();
    let db = td.path().join("passwords.db");

    passdesk(td.path(), &db)
        .args(["add", "--service", "   ", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("service name is required"));

    passdesk(td.path(), &db)
        .args(["add", "--service", "  padded  ", "--password", "pw"])
        .assert()
        .success();
    passdesk(td.path(), &db)
        .args(["get", "padded", "--no-copy", "--echo"])
        .assert()
        .success()
        .stdout("pw\n");
}

#[test]
fn adding_an_existing_service_fails() {
    let td = tempdir().unwrap();
    let db = td.path().join("passwords.db");
    add(td.path(), &db, "mail", "one");

    passdesk(td.path(), &db)
        .args(["add", "--service", "mail", "--password", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // The config switch lets duplicates through
    passdesk(td.path(), &db)
        .env("PASSDESK_ALLOW_DUPLICATES", "true")
        .args(["add", "--service", "mail", "--password", "two"])
        .assert()
        .success();
    passdesk(td.path(), &db)
        .args(["list", "--query", "mail"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mail").count(2));
}

#[test]
fn edit_renames_and_updates_fields() {
    let td = tempdir().unwrap();
    let db = td.path().join("passwords.db");
    add(td.path(), &db, "old", "pw");

    passdesk(td.path(), &db)
        .args(["edit", "old", "--rename", "new", "--login", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry 'new' updated"));

    passdesk(td.path(), &db)
        .args(["get", "old", "--no-copy", "--echo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry found"));
    passdesk(td.path(), &db)
        .args(["get", "new", "--field", "login", "--no-copy", "--echo"])
        .assert()
        .success()
        .stdout("alice\n");
    // Untouched fields keep their values
    passdesk(td.path(), &db)
        .args(["get", "new", "--no-copy", "--echo"])
        .assert()
        .success()
        .stdout("pw\n");
}

#[test]
fn edit_missing_entry_fails() {
    let td = tempdir().unwrap();
    let db = td.path().join("passwords.db");

    passdesk(td.path(), &db)
        .args(["edit", "ghost", "--url", "https://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry 'ghost' not found"));
}

#[test]
fn rm_and_clear_with_yes() {
    let td = tempdir().unwrap();
    let db = td.path().join("passwords.db");
    add(td.path(), &db, "a", "1");
    add(td.path(), &db, "b", "2");
    add(td.path(), &db, "c", "3");

    passdesk(td.path(), &db)
        .args(["rm", "a", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry 'a' removed"));
    passdesk(td.path(), &db)
        .args(["rm", "a", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry found with service 'a'"));

    passdesk(td.path(), &db)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries were deleted (2)"));
    passdesk(td.path(), &db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty)"));
}

#[test]
fn open_without_url_reports_it() {
    let td = tempdir().unwrap();
    let db = td.path().join("passwords.db");
    passdesk(td.path(), &db)
        .args(["add", "--service", "nourl", "--password", "pw"])
        .assert()
        .success();

    passdesk(td.path(), &db)
        .args(["open", "nourl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No URL stored for 'nourl'"));
}
