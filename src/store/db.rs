use rusqlite::Connection;
use std::fs;
use std::path::Path;

use super::StoreError;

/// Owned handle to the password database. Opened once at startup and closed on drop.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file, creating its parent directory when missing.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.ensure_schema()?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // Plain columns, no key constraint: files written by older builds must keep opening.
    fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS passwords (
                service  TEXT,
                url      TEXT,
                login    TEXT,
                password TEXT
            );",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_in_memory_creates_passwords_table() {
        let db = Database::open_in_memory().unwrap();
        let count: i64 = db
            .conn()
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='passwords'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn schema_setup_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.ensure_schema().is_ok());
    }

    #[test]
    fn open_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("passwords.db");
        let db = Database::open(&path);
        assert!(db.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn open_accepts_existing_file_without_schema_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.db");
        {
            let db = Database::open(&path).unwrap();
            db.conn()
                .execute(
                    "INSERT INTO passwords (service, url, login, password) VALUES ('a', NULL, NULL, 'p')",
                    [],
                )
                .unwrap();
        }
        let db = Database::open(&path).unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT count(*) FROM passwords", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
