//! Text-table rendering of a trend report.

use std::io::{self, Write};

use crate::data::{PeriodAverage, TrendReport};

/// Print all three tables to stdout, coarsest granularity first.
pub fn print_report(report: &TrendReport) -> io::Result<()> {
    let stdout = io::stdout();
    render_report(&mut stdout.lock(), report)
}

/// Render all three tables to any writer.
pub fn render_report<W: Write>(out: &mut W, report: &TrendReport) -> io::Result<()> {
    render_table(out, "Monthly Average Heart Rate", &report.monthly)?;
    render_table(out, "Weekly Average Heart Rate", &report.weekly)?;
    render_table(out, "Daily Average Heart Rate", &report.daily)?;
    Ok(())
}

fn render_table<W: Write>(out: &mut W, title: &str, rows: &[PeriodAverage]) -> io::Result<()> {
    writeln!(out, "\n--- {title} ---")?;
    if rows.is_empty() {
        writeln!(out, "(no data)")?;
        return Ok(());
    }

    writeln!(out, "{:<12} {:>8} {:>8}", "Period", "Avg BPM", "Samples")?;
    for row in rows {
        // Averages are shown to one decimal place.
        writeln!(
            out,
            "{:<12} {:>8.1} {:>8}",
            row.key.to_string(),
            row.average,
            row.count
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Sample, TimeBasis, TrendReport};
    use chrono::{TimeZone, Utc};

    fn report() -> TrendReport {
        let samples = vec![
            Sample {
                time: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
                bpm: 60.0,
            },
            Sample {
                time: Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap(),
                bpm: 81.0,
            },
        ];
        TrendReport::build(&samples, TimeBasis::Utc)
    }

    fn rendered(report: &TrendReport) -> String {
        let mut buf = Vec::new();
        render_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_tables_in_coarsest_first_order() {
        let text = rendered(&report());
        let monthly = text.find("Monthly Average Heart Rate").unwrap();
        let weekly = text.find("Weekly Average Heart Rate").unwrap();
        let daily = text.find("Daily Average Heart Rate").unwrap();
        assert!(monthly < weekly && weekly < daily);
    }

    #[test]
    fn test_rows_rounded_to_one_decimal() {
        let text = rendered(&report());
        // 60 + 81 over two samples averages to 70.5.
        assert!(text.contains("70.5"));
        assert!(text.contains("2024-01-01"));
        assert!(text.contains("2024-W01"));
        assert!(text.contains("2024-01 "));
    }

    #[test]
    fn test_empty_report_renders_placeholders() {
        let text = rendered(&TrendReport::default());
        assert_eq!(text.matches("(no data)").count(), 3);
    }
}
