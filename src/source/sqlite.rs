//! SQLite-backed sample source for Health Connect exports.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use super::schema::{ColumnInfo, SchemaMapping};
use super::{SampleSource, SourceError};
use crate::data::Sample;

/// Reads heart-rate samples from a SQLite database export.
///
/// The file is opened read-only; the connection is released when the
/// source is dropped, on every exit path. [`SqliteSource::validate`]
/// checks the schema mapping against `PRAGMA table_info` so that a wrong
/// mapping fails fast as a [`SourceError::SchemaMismatch`] instead of
/// surfacing as a raw SQL error mid-query.
#[derive(Debug)]
pub struct SqliteSource {
    conn: Connection,
    path: PathBuf,
    schema: SchemaMapping,
    description: String,
}

impl SqliteSource {
    /// Open a database export read-only.
    ///
    /// Fails with [`SourceError::DataAccess`] if the file is missing or
    /// cannot be opened as a database.
    pub fn open<P: AsRef<Path>>(path: P, schema: SchemaMapping) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(SourceError::DataAccess {
                path: path.display().to_string(),
                cause: "file not found".to_string(),
            });
        }

        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
            |e| SourceError::DataAccess {
                path: path.display().to_string(),
                cause: e.to_string(),
            },
        )?;

        let description = format!("sqlite: {}", path.display());
        Ok(Self {
            conn,
            path,
            schema,
            description,
        })
    }

    /// The schema mapping this source was opened with.
    pub fn schema(&self) -> &SchemaMapping {
        &self.schema
    }

    /// List the configured table's columns, as reported by the database.
    ///
    /// Fails with [`SourceError::SchemaMismatch`] if the table does not
    /// exist, or [`SourceError::DataAccess`] if the file is not a valid
    /// database. This is the `--inspect-schema` diagnostic.
    pub fn columns(&self) -> Result<Vec<ColumnInfo>, SourceError> {
        let mut stmt = self
            .conn
            .prepare("SELECT cid, name, type FROM pragma_table_info(?1)")
            .map_err(|e| self.access_error(e))?;

        let rows = stmt
            .query_map([self.schema.table.as_str()], |row| {
                Ok(ColumnInfo {
                    index: row.get(0)?,
                    name: row.get(1)?,
                    declared_type: row.get(2)?,
                })
            })
            .map_err(|e| self.access_error(e))?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row.map_err(|e| self.access_error(e))?);
        }

        if columns.is_empty() {
            return Err(SourceError::SchemaMismatch {
                detail: format!("table '{}' not found", self.schema.table),
            });
        }
        Ok(columns)
    }

    /// Check that the configured timestamp and BPM columns exist.
    pub fn validate(&self) -> Result<(), SourceError> {
        let columns = self.columns()?;
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

        for wanted in [&self.schema.time_column, &self.schema.bpm_column] {
            if !names.contains(&wanted.as_str()) {
                return Err(SourceError::SchemaMismatch {
                    detail: format!(
                        "column '{}' not found in table '{}' (present: {})",
                        wanted,
                        self.schema.table,
                        names.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    fn access_error(&self, err: rusqlite::Error) -> SourceError {
        SourceError::DataAccess {
            path: self.path.display().to_string(),
            cause: err.to_string(),
        }
    }
}

impl SampleSource for SqliteSource {
    fn fetch(&self) -> Result<Vec<Sample>, SourceError> {
        // Identifiers come from the validated mapping; SQLite cannot bind
        // identifiers, so they are interpolated quoted. Zero and negative
        // readings are corrupt rows in real exports and are excluded at
        // the query level.
        let sql = format!(
            "SELECT {time}, {bpm} FROM {table} WHERE {bpm} > 0 ORDER BY {time} ASC",
            time = quote_ident(&self.schema.time_column),
            bpm = quote_ident(&self.schema.bpm_column),
            table = quote_ident(&self.schema.table),
        );

        let mut stmt = self.conn.prepare(&sql).map_err(|e| self.access_error(e))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, f64>(1)?)))
            .map_err(|e| self.access_error(e))?;

        let mut samples = Vec::new();
        for row in rows {
            let (millis, bpm) = row.map_err(|e| self.access_error(e))?;
            match Sample::from_epoch_millis(millis, bpm) {
                Some(sample) => samples.push(sample),
                None => debug!(millis, "skipping sample with out-of-range timestamp"),
            }
        }

        debug!(rows = samples.len(), "fetched samples");
        Ok(samples)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Double-quote an SQL identifier, escaping embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
