mod csv_format;

pub use csv_format::{export, import, ImportSummary, TransferError, DEFAULT_EXPORT_FILE, HEADER};
