use passdesk::store::{Credential, CredentialStore, Database, SqliteCredentialStore, StoreError};
use tempfile::tempdir;

fn seed(store: &dyn CredentialStore, rows: &[(&str, &str, &str, &str)]) {
    for (service, url, login, password) in rows {
        store
            .insert(&Credential::new(*service, *url, *login, *password))
            .expect("insert");
    }
}

#[test]
fn records_survive_reopening_the_database() {
    let td = tempdir().unwrap();
    let path = td.path().join("nested").join("passwords.db");

    {
        let db = Database::open(&path).expect("open creates parent dir");
        let store = SqliteCredentialStore::new(&db);
        seed(&store, &[("github", "https://github.com", "octo", "pw1")]);
    }

    let db = Database::open(&path).expect("reopen");
    let store = SqliteCredentialStore::new(&db);
    let details = store.fetch("github").unwrap().expect("row present");
    assert_eq!(details.login, "octo");
    assert_eq!(details.password, "pw1");
}

#[test]
fn list_filtered_is_case_insensitive_substring_on_service() {
    let db = Database::open_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&db);
    seed(
        &store,
        &[
            ("GitHub", "https://github.com", "", "a"),
            ("gitlab", "https://lab.example", "", "b"),
            ("mail", "https://git.example", "", "c"),
        ],
    );

    let names: Vec<String> = store
        .list_filtered("GIT")
        .unwrap()
        .into_iter()
        .map(|s| s.service)
        .collect();
    // URL matches do not count
    assert_eq!(names, vec!["GitHub".to_string(), "gitlab".to_string()]);
    assert_eq!(store.list_filtered("").unwrap().len(), 3);
    assert!(store.list_filtered("nothing").unwrap().is_empty());
}

#[test]
fn fetch_is_exact_match() {
    let db = Database::open_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&db);
    seed(&store, &[("Mail", "", "me", "pw")]);

    assert!(store.fetch("mail").unwrap().is_none());
    assert!(store.fetch("Mai").unwrap().is_none());
    assert!(store.fetch("Mail").unwrap().is_some());
}

#[test]
fn update_moves_record_to_new_service_name() {
    let db = Database::open_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&db);
    seed(&store, &[("old", "u", "l", "p")]);

    let changed = store
        .upsert(&Credential::new("new", "u2", "l2", "p2"), Some("old"))
        .unwrap();
    assert_eq!(changed, 1);
    assert!(store.fetch("old").unwrap().is_none());
    let details = store.fetch("new").unwrap().unwrap();
    assert_eq!((details.url.as_str(), details.password.as_str()), ("u2", "p2"));
}

#[test]
fn update_of_missing_record_changes_nothing() {
    let db = Database::open_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&db);

    let changed = store
        .upsert(&Credential::new("x", "", "", "p"), Some("ghost"))
        .unwrap();
    assert_eq!(changed, 0);
    assert!(store.all().unwrap().is_empty());
}

#[test]
fn duplicate_service_is_rejected_unless_allowed() {
    let db = Database::open_in_memory().unwrap();
    let strict = SqliteCredentialStore::new(&db);
    seed(&strict, &[("dup", "", "", "p")]);

    let err = strict
        .upsert(&Credential::new("dup", "", "", "q"), None)
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateService(ref s) if s == "dup"));

    // Renaming onto an existing service is a collision too
    seed(&strict, &[("other", "", "", "p")]);
    assert!(strict
        .upsert(&Credential::new("dup", "", "", "p"), Some("other"))
        .is_err());
    // Keeping the same name while editing is fine
    assert_eq!(
        strict
            .upsert(&Credential::new("dup", "u", "", "p"), Some("dup"))
            .unwrap(),
        1
    );

    let lenient = SqliteCredentialStore::new(&db).with_duplicates_allowed(true);
    lenient
        .upsert(&Credential::new("dup", "", "", "q"), None)
        .unwrap();
    assert_eq!(lenient.list_filtered("dup").unwrap().len(), 2);
}

#[test]
fn delete_removes_every_row_with_that_service() {
    let db = Database::open_in_memory().unwrap();
    let store = SqliteCredentialStore::new(&db);
    seed(&store, &[("a", "", "", "1"), ("a", "", "", "2"), ("b", "", "", "3")]);

    assert_eq!(store.delete("a").unwrap(), 2);
    assert_eq!(store.delete("a").unwrap(), 0);
    assert_eq!(store.all().unwrap().len(), 1);

    assert_eq!(store.delete_all().unwrap(), 1);
    assert!(store.list_filtered("").unwrap().is_empty());
}
