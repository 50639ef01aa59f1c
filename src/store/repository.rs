use rusqlite::{params, OptionalExtension};

use super::db::Database;
use super::models::{Credential, CredentialDetails, CredentialSummary};
use super::StoreError;

/// Operations the front ends and the CSV transfer need from the record store.
pub trait CredentialStore {
    /// Records whose service contains `query`, ignoring case. An empty query returns everything.
    fn list_filtered(&self, query: &str) -> Result<Vec<CredentialSummary>, StoreError>;

    /// Exact-match lookup. If several rows share the service, the first one wins.
    fn fetch(&self, service: &str) -> Result<Option<CredentialDetails>, StoreError>;

    fn exists(&self, service: &str) -> Result<bool, StoreError>;

    /// Insert without any duplicate check.
    fn insert(&self, credential: &Credential) -> Result<(), StoreError>;

    /// Update the record(s) named `previous_service` when given, insert otherwise.
    /// Returns the number of affected rows; an update that matches nothing returns 0.
    fn upsert(
        &self,
        credential: &Credential,
        previous_service: Option<&str>,
    ) -> Result<usize, StoreError>;

    fn delete(&self, service: &str) -> Result<usize, StoreError>;

    fn delete_all(&self) -> Result<usize, StoreError>;

    /// Every record in storage order.
    fn all(&self) -> Result<Vec<Credential>, StoreError>;
}

pub struct SqliteCredentialStore<'a> {
    db: &'a Database,
    allow_duplicates: bool,
}

impl<'a> SqliteCredentialStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            allow_duplicates: false,
        }
    }

    /// Let add/edit create several records with the same service name.
    pub fn with_duplicates_allowed(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    fn row_to_credential(row: &rusqlite::Row<'_>) -> rusqlite::Result<Credential> {
        Ok(Credential {
            service: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            url: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            login: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            password: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    }

    fn ensure_free(&self, service: &str) -> Result<(), StoreError> {
        if !self.allow_duplicates && self.exists(service)? {
            return Err(StoreError::DuplicateService(service.to_string()));
        }
        Ok(())
    }
}

impl CredentialStore for SqliteCredentialStore<'_> {
    fn list_filtered(&self, query: &str) -> Result<Vec<CredentialSummary>, StoreError> {
        let mut stmt = self.db.conn().prepare("SELECT service, url FROM passwords")?;
        let rows = stmt.query_map([], |row| {
            Ok(CredentialSummary {
                service: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                url: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        })?;
        let mut all = rows.collect::<Result<Vec<_>, _>>()?;

        if !query.is_empty() {
            let q = query.to_lowercase();
            all.retain(|s| s.service.to_lowercase().contains(&q));
        }
        Ok(all)
    }

    fn fetch(&self, service: &str) -> Result<Option<CredentialDetails>, StoreError> {
        let details = self
            .db
            .conn()
            .query_row(
                "SELECT url, login, password FROM passwords WHERE service = ?1",
                params![service],
                |row| {
                    Ok(CredentialDetails {
                        url: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                        login: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                        password: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?;
        Ok(details)
    }

    fn exists(&self, service: &str) -> Result<bool, StoreError> {
        let found = self
            .db
            .conn()
            .query_row(
                "SELECT 1 FROM passwords WHERE service = ?1",
                params![service],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn insert(&self, c: &Credential) -> Result<(), StoreError> {
        self.db.conn().execute(
            "INSERT INTO passwords (service, url, login, password) VALUES (?1, ?2, ?3, ?4)",
            params![c.service, c.url, c.login, c.password],
        )?;
        tracing::debug!(service = %c.service, "inserted");
        Ok(())
    }

    fn upsert(
        &self,
        c: &Credential,
        previous_service: Option<&str>,
    ) -> Result<usize, StoreError> {
        match previous_service {
            Some(previous) => {
                if previous != c.service {
                    self.ensure_free(&c.service)?;
                }
                let changed = self.db.conn().execute(
                    "UPDATE passwords SET service = ?1, url = ?2, login = ?3, password = ?4
                     WHERE service = ?5",
                    params![c.service, c.url, c.login, c.password, previous],
                )?;
                tracing::info!(from = %previous, to = %c.service, rows = changed, "updated");
                Ok(changed)
            }
            None => {
                self.ensure_free(&c.service)?;
                self.insert(c)?;
                tracing::info!(service = %c.service, "added");
                Ok(1)
            }
        }
    }

    fn delete(&self, service: &str) -> Result<usize, StoreError> {
        let removed = self
            .db
            .conn()
            .execute("DELETE FROM passwords WHERE service = ?1", params![service])?;
        tracing::info!(%service, rows = removed, "deleted");
        Ok(removed)
    }

    fn delete_all(&self) -> Result<usize, StoreError> {
        let removed = self.db.conn().execute("DELETE FROM passwords", [])?;
        tracing::info!(rows = removed, "deleted all entries");
        Ok(removed)
    }

    fn all(&self) -> Result<Vec<Credential>, StoreError> {
        let mut stmt = self
            .db
            .conn()
            .prepare("SELECT service, url, login, password FROM passwords")?;
        let rows = stmt.query_map([], Self::row_to_credential)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
