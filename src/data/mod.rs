//! Data models and processing for heart-rate samples.
//!
//! This module turns the raw sample sequence from the source into the
//! per-period averages the presentation layer displays.
//!
//! ## Submodules
//!
//! - [`sample`]: the [`Sample`] reading and the [`TimeBasis`] used for calendar splits
//! - [`filter`]: the optional maximum-BPM filter applied before aggregation
//! - [`bucket`]: calendar bucketing (day / ISO week / month) and per-period averages
//!
//! ## Data Flow
//!
//! ```text
//! Vec<Sample> (from source)
//!        │
//!        ▼
//! filter::apply_max_bpm()
//!        │
//!        ▼
//! TrendReport::build() ──▶ daily / weekly / monthly Vec<PeriodAverage>
//! ```

pub mod bucket;
pub mod filter;
pub mod sample;

pub use bucket::{aggregate, BucketKey, Granularity, PeriodAverage, TrendReport};
pub use filter::apply_max_bpm;
pub use sample::{Sample, TimeBasis};
