//! In-memory sample source, for tests and library consumers.

use super::{SampleSource, SourceError};
use crate::data::Sample;

/// A sample source backed by a vector.
///
/// Samples are returned sorted by timestamp, matching the contract of the
/// database-backed source.
#[derive(Debug, Clone)]
pub struct MemorySource {
    samples: Vec<Sample>,
    description: String,
}

impl MemorySource {
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.time);
        Self {
            samples,
            description: "memory".to_string(),
        }
    }
}

impl SampleSource for MemorySource {
    fn fetch(&self) -> Result<Vec<Sample>, SourceError> {
        Ok(self.samples.clone())
    }

    fn description(&self) -> &str {
        &self.description
    }
}
