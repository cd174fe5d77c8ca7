//! Presentation layer: console tables and the interactive chart.
//!
//! - [`console`]: formatted text tables on stdout
//! - [`chart`]: self-contained interactive HTML chart via plotly

pub mod chart;
pub mod console;

use clap::ValueEnum;

/// How a trend report is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Formatted text tables on stdout.
    #[default]
    Console,
    /// Interactive HTML chart, opened in the system viewer.
    Graph,
}
