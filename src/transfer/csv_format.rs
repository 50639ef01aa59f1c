use std::io::{Read, Write};

use thiserror::Error;

use crate::store::{Credential, CredentialStore, StoreError};

pub const HEADER: [&str; 4] = ["Service", "URL", "Login", "Password"];
pub const DEFAULT_EXPORT_FILE: &str = "passwords_export.csv";
const DELIMITER: u8 = b';';

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Rows inserted before the failure stay in the store.
    #[error("import stopped after {imported} record(s): {source}")]
    Interrupted {
        imported: usize,
        #[source]
        source: Box<TransferError>,
    },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Rows with fewer than four columns.
    pub skipped_short: usize,
    /// Rows whose service or password is blank after trimming.
    pub skipped_incomplete: usize,
    /// Rows whose service is already in the store.
    pub skipped_existing: usize,
}

impl ImportSummary {
    pub fn skipped(&self) -> usize {
        self.skipped_short + self.skipped_incomplete + self.skipped_existing
    }
}

/// Write every record as `;`-separated UTF-8 with a header row. Returns the number of records.
pub fn export<W: Write>(store: &dyn CredentialStore, writer: W) -> Result<usize, TransferError> {
    let records = store.all()?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for c in &records {
        wtr.write_record([&c.service, &c.url, &c.login, &c.password])?;
    }
    wtr.flush()?;
    tracing::info!(count = records.len(), "exported");
    Ok(records.len())
}

/// Insert rows from `;`-separated UTF-8 text. The first row is always treated as the header,
/// even when it is blank.
pub fn import<R: Read>(
    store: &dyn CredentialStore,
    reader: R,
) -> Result<ImportSummary, TransferError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut summary = ImportSummary::default();
    for (index, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| interrupted(summary.imported, e.into()))?;
        // The reader drops blank lines, so a blank header means the first record
        // starts below line 1 and is data.
        if index == 0 && record.position().map_or(true, |p| p.line() == 1) {
            continue;
        }
        if record.len() < 4 {
            summary.skipped_short += 1;
            continue;
        }

        let credential = Credential::new(
            record[0].trim(),
            record[1].trim(),
            record[2].trim(),
            record[3].trim(),
        );
        if credential.service.is_empty() || credential.password.is_empty() {
            tracing::debug!(line = index + 1, "skipping row without service or password");
            summary.skipped_incomplete += 1;
            continue;
        }

        let exists = store
            .exists(&credential.service)
            .map_err(|e| interrupted(summary.imported, e.into()))?;
        if exists {
            tracing::debug!(service = %credential.service, "skipping existing service");
            summary.skipped_existing += 1;
            continue;
        }

        store
            .insert(&credential)
            .map_err(|e| interrupted(summary.imported, e.into()))?;
        summary.imported += 1;
    }

    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped(),
        "import finished"
    );
    Ok(summary)
}

fn interrupted(imported: usize, source: TransferError) -> TransferError {
    tracing::warn!(imported, error = %source, "import interrupted");
    TransferError::Interrupted {
        imported,
        source: Box::new(source),
    }
}
