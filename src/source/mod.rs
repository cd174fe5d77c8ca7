//! Data source abstraction for reading heart-rate samples.
//!
//! This module provides a trait-based seam between the pipeline and the
//! backing store, a SQLite implementation for Health Connect exports, and
//! the schema-mapping configuration validated against the database
//! metadata at startup.

mod error;
mod memory;
mod schema;
mod sqlite;

pub use error::SourceError;
pub use memory::MemorySource;
pub use schema::{
    ColumnInfo, SchemaMapping, SchemaOverrides, DEFAULT_BPM_COLUMN, DEFAULT_TABLE,
    DEFAULT_TIME_COLUMN,
};
pub use sqlite::SqliteSource;

use crate::data::Sample;

/// Trait for reading the full sample sequence from a backing store.
///
/// # Example
///
/// ```
/// use hrtrend::data::Sample;
/// use hrtrend::source::{MemorySource, SampleSource};
///
/// let source = MemorySource::new(vec![Sample::from_epoch_millis(1_000, 72.0).unwrap()]);
/// let samples = source.fetch().unwrap();
/// assert_eq!(samples.len(), 1);
/// ```
pub trait SampleSource {
    /// Fetch all samples, ordered by timestamp.
    ///
    /// One pass per invocation; the whole dataset is assumed to fit in
    /// memory.
    fn fetch(&self) -> Result<Vec<Sample>, SourceError>;

    /// Human-readable description of the source, for logs.
    fn description(&self) -> &str;
}
