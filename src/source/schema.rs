//! Schema mapping configuration for the database export.
//!
//! Health Connect exports are not protocol-guaranteed: other tools write
//! the same data under different table and column names. The mapping is
//! resolved from built-in defaults, then an optional mapping file, then
//! CLI overrides, and validated against the actual database metadata
//! before any data query runs.

use std::path::Path;

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Table name used by Android Health Connect exports.
pub const DEFAULT_TABLE: &str = "heart_rate_record_series_table";
/// Epoch-milliseconds timestamp column in Health Connect exports.
pub const DEFAULT_TIME_COLUMN: &str = "epoch_millis";
/// Beats-per-minute column in Health Connect exports.
pub const DEFAULT_BPM_COLUMN: &str = "beats_per_minute";

/// Where the heart-rate samples live inside the export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemaMapping {
    /// Table holding the sample rows.
    pub table: String,
    /// Integer epoch-milliseconds timestamp column.
    pub time_column: String,
    /// Numeric beats-per-minute column.
    pub bpm_column: String,
}

impl Default for SchemaMapping {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            time_column: DEFAULT_TIME_COLUMN.to_string(),
            bpm_column: DEFAULT_BPM_COLUMN.to_string(),
        }
    }
}

/// CLI-level overrides applied on top of defaults and the mapping file.
#[derive(Debug, Clone, Default)]
pub struct SchemaOverrides {
    pub table: Option<String>,
    pub time_column: Option<String>,
    pub bpm_column: Option<String>,
}

impl SchemaMapping {
    /// Resolve the mapping: defaults, then `file` if given, then `overrides`.
    pub fn resolve(file: Option<&Path>, overrides: &SchemaOverrides) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("table", DEFAULT_TABLE)?
            .set_default("time_column", DEFAULT_TIME_COLUMN)?
            .set_default("bpm_column", DEFAULT_BPM_COLUMN)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
        if let Some(table) = &overrides.table {
            builder = builder.set_override("table", table.as_str())?;
        }
        if let Some(column) = &overrides.time_column {
            builder = builder.set_override("time_column", column.as_str())?;
        }
        if let Some(column) = &overrides.bpm_column {
            builder = builder.set_override("bpm_column", column.as_str())?;
        }

        builder.build()?.try_deserialize()
    }
}

/// One column of the configured table, as reported by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Zero-based column index.
    pub index: i64,
    pub name: String,
    /// Declared SQL type, possibly empty for untyped columns.
    pub declared_type: String,
}
