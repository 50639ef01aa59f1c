mod db;
mod error;
mod models;
mod repository;

pub use db::Database;
pub use error::StoreError;
pub use models::{Credential, CredentialDetails, CredentialSummary};
pub use repository::{CredentialStore, SqliteCredentialStore};
