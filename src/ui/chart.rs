//! Interactive chart rendering of a trend report.
//!
//! The chart renderer is an external collaborator: this module only
//! assembles labeled series with per-point hover metadata, writes the
//! self-contained HTML artifact, and hands it to the system viewer.

use std::path::Path;

use plotly::common::{DashType, Line, Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use tracing::{info, warn};

use crate::data::{PeriodAverage, TrendReport};

/// Build the three-series figure for a trend report.
///
/// Daily is drawn dotted with small markers, weekly dashed, monthly as a
/// solid line, so the coarser trends stand out over the daily scatter.
pub fn build_plot(report: &TrendReport) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(series("Daily Avg", &report.daily, DashType::Dot, 1.0, 4));
    plot.add_trace(series("Weekly Avg", &report.weekly, DashType::Dash, 2.0, 6));
    plot.add_trace(series("Monthly Avg", &report.monthly, DashType::Solid, 3.0, 8));
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Average Heart Rate Over Time"))
            .x_axis(Axis::new().title(Title::with_text("Date")))
            .y_axis(Axis::new().title(Title::with_text("Beats Per Minute (BPM)"))),
    );
    plot
}

fn series(
    name: &str,
    rows: &[PeriodAverage],
    dash: DashType,
    width: f64,
    marker_size: usize,
) -> Box<Scatter<String, f64>> {
    let x: Vec<String> = rows
        .iter()
        .map(|r| r.key.start_date().format("%Y-%m-%d").to_string())
        .collect();
    let y: Vec<f64> = rows.iter().map(|r| r.average).collect();
    let hover: Vec<String> = rows
        .iter()
        .map(|r| format!("{}: {:.1} BPM ({} samples)", r.key, r.average, r.count))
        .collect();

    Scatter::new(x, y)
        .name(name)
        .mode(Mode::LinesMarkers)
        .line(Line::new().dash(dash).width(width))
        .marker(Marker::new().size(marker_size))
        .hover_text_array(hover)
}

/// Write the chart artifact and try to open it in the system viewer.
///
/// The artifact path is always reported, so the chart stays reachable
/// even when no viewer is available (headless machines, SSH sessions).
pub fn show_report(report: &TrendReport, out_path: &Path) {
    let plot = build_plot(report);
    plot.write_html(out_path);
    info!(path = %out_path.display(), "wrote chart artifact");
    println!("Chart written to: {}", out_path.display());

    if let Err(err) = open::that(out_path) {
        warn!(%err, "could not launch a viewer; open the chart manually");
    }
}
