//! End-to-end pipeline tests against real temporary SQLite exports.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use hrtrend::data::{apply_max_bpm, TimeBasis, TrendReport};
use hrtrend::source::{SampleSource, SchemaMapping, SourceError, SqliteSource};
use hrtrend::ui::console::render_report;

fn millis(y: i32, m: u32, d: u32, h: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn fixture_db(dir: &TempDir, rows: &[(i64, f64)]) -> PathBuf {
    let path = dir.path().join("export.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE heart_rate_record_series_table (
            epoch_millis INTEGER NOT NULL,
            beats_per_minute INTEGER NOT NULL
        )",
    )
    .unwrap();
    for (t, bpm) in rows {
        conn.execute(
            "INSERT INTO heart_rate_record_series_table (epoch_millis, beats_per_minute)
             VALUES (?1, ?2)",
            rusqlite::params![t, bpm],
        )
        .unwrap();
    }
    path
}

fn report_from(path: &PathBuf, max_bpm: Option<f64>) -> TrendReport {
    let source = SqliteSource::open(path, SchemaMapping::default()).unwrap();
    source.validate().unwrap();
    let samples = apply_max_bpm(source.fetch().unwrap(), max_bpm);
    TrendReport::build(&samples, TimeBasis::Utc)
}

#[test]
fn two_samples_one_day_average_to_seventy() {
    let dir = TempDir::new().unwrap();
    let path = fixture_db(
        &dir,
        &[
            (millis(2024, 1, 1, 8), 60.0),
            (millis(2024, 1, 1, 20), 80.0),
        ],
    );

    let report = report_from(&path, None);

    assert_eq!(report.daily.len(), 1);
    assert_eq!(report.daily[0].key.to_string(), "2024-01-01");
    assert_eq!(report.daily[0].average, 70.0);
    assert_eq!(report.daily[0].count, 2);
}

#[test]
fn max_bpm_excludes_sample_from_all_granularities() {
    let dir = TempDir::new().unwrap();
    let path = fixture_db(
        &dir,
        &[
            (millis(2024, 1, 1, 8), 60.0),
            (millis(2024, 1, 1, 12), 150.0),
            (millis(2024, 1, 1, 20), 80.0),
        ],
    );

    let report = report_from(&path, Some(100.0));

    for rows in [&report.daily, &report.weekly, &report.monthly] {
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].average, 70.0);
        assert_eq!(rows[0].count, 2);
    }

    // Without the threshold the 150 reading is included everywhere.
    let unfiltered = report_from(&path, None);
    assert_eq!(unfiltered.daily[0].count, 3);
}

#[test]
fn samples_spanning_two_iso_weeks_make_two_buckets() {
    let dir = TempDir::new().unwrap();
    let path = fixture_db(
        &dir,
        &[
            (millis(2024, 1, 1, 9), 60.0),
            (millis(2024, 1, 8, 9), 90.0),
        ],
    );

    let report = report_from(&path, None);

    assert_eq!(report.weekly.len(), 2);
    assert_eq!(report.weekly[0].key.to_string(), "2024-W01");
    assert_eq!(report.weekly[0].average, 60.0);
    assert_eq!(report.weekly[1].key.to_string(), "2024-W02");
    assert_eq!(report.weekly[1].average, 90.0);
    assert_eq!(report.monthly.len(), 1);
}

#[test]
fn missing_file_fails_before_any_output() {
    let result = SqliteSource::open("/nonexistent/dir/export.db", SchemaMapping::default());
    assert!(matches!(result, Err(SourceError::DataAccess { .. })));
}

#[test]
fn missing_column_is_reported_as_schema_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("renamed.db");
    rusqlite::Connection::open(&path)
        .unwrap()
        .execute_batch(
            "CREATE TABLE heart_rate_record_series_table (
                time INTEGER, beats_per_minute INTEGER
            )",
        )
        .unwrap();

    let source = SqliteSource::open(&path, SchemaMapping::default()).unwrap();
    let err = source.validate().unwrap_err();
    assert!(matches!(err, SourceError::SchemaMismatch { .. }));
    assert!(err.to_string().contains("--inspect-schema"));
}

#[test]
fn empty_result_renders_empty_tables_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture_db(&dir, &[]);

    let report = report_from(&path, None);
    assert!(report.is_empty());

    let mut buf = Vec::new();
    render_report(&mut buf, &report).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.matches("(no data)").count(), 3);
}

#[test]
fn filtering_to_nothing_is_also_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = fixture_db(&dir, &[(millis(2024, 1, 1, 8), 160.0)]);

    let report = report_from(&path, Some(100.0));
    assert!(report.is_empty());
}
