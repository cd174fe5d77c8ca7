// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # hrtrend
//!
//! Heart-rate trend reports from Health Connect SQLite exports.
//!
//! This crate reads time-stamped heart-rate samples from a database
//! export, aggregates them into daily, ISO-weekly, and monthly averages,
//! and renders the result as text tables or an interactive HTML chart.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Pipeline                             │
//! │  ┌─────────┐    ┌──────────┐    ┌────────────┐   ┌────────┐ │
//! │  │ source  │───▶│  filter  │───▶│ aggregate  │──▶│   ui   │ │
//! │  │ (fetch) │    │(max BPM) │    │(day/wk/mo) │   │(render)│ │
//! │  └─────────┘    └──────────┘    └────────────┘   └────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: data source abstraction ([`SampleSource`] trait) with a
//!   read-only SQLite implementation, the schema-mapping configuration, and
//!   the column-listing diagnostic
//! - **[`data`]**: the sample model, the optional maximum-BPM filter, and
//!   the calendar bucketing/averaging engine ([`TrendReport`])
//! - **[`ui`]**: presentation - text tables on stdout or a plotly HTML chart
//!
//! The pipeline is a single synchronous pass: fetch, filter, group,
//! average, present. Nothing persists between invocations.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Text tables (default)
//! hrtrend health_connect_export.db
//!
//! # Interactive chart, ignoring readings above 100 BPM
//! hrtrend health_connect_export.db --output graph --max-bpm 100
//!
//! # List the columns the export actually has
//! hrtrend health_connect_export.db --inspect-schema
//! ```
//!
//! ### As a library
//!
//! ```
//! use hrtrend::data::{apply_max_bpm, Sample, TimeBasis, TrendReport};
//! use hrtrend::source::{MemorySource, SampleSource};
//!
//! let source = MemorySource::new(vec![
//!     Sample::from_epoch_millis(1_704_096_000_000, 60.0).unwrap(),
//!     Sample::from_epoch_millis(1_704_139_200_000, 80.0).unwrap(),
//! ]);
//! let samples = apply_max_bpm(source.fetch().unwrap(), Some(100.0));
//! let report = TrendReport::build(&samples, TimeBasis::Utc);
//! assert_eq!(report.daily[0].average, 70.0);
//! ```

pub mod data;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use data::{
    aggregate, apply_max_bpm, BucketKey, Granularity, PeriodAverage, Sample, TimeBasis, TrendReport,
};
pub use source::{
    ColumnInfo, MemorySource, SampleSource, SchemaMapping, SchemaOverrides, SourceError,
    SqliteSource,
};
pub use ui::OutputMode;
