//! Error types for the data source adapter.

use thiserror::Error;

/// Errors that can occur while reading samples from a database export.
///
/// Both variants are terminal: a missing file or a wrong schema is not
/// transient, so nothing here is retried.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file is missing, unreadable, or not a valid SQLite database.
    #[error("cannot read database {path}: {cause}")]
    DataAccess { path: String, cause: String },

    /// The configured table or columns are absent from the database.
    #[error("schema mismatch: {detail} (run --inspect-schema to list the columns actually present)")]
    SchemaMismatch { detail: String },
}
