//! Calendar bucketing and per-period averaging.
//!
//! Samples are grouped into day, ISO-week, or month buckets and each
//! bucket's arithmetic mean is computed. Only periods with at least one
//! sample appear in the output; empty buckets are omitted, not zero-filled.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use super::sample::{Sample, TimeBasis};

/// Calendar period granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    IsoWeek,
    Month,
}

/// Identifier of one calendar-aligned bucket.
///
/// Keys of the same granularity order chronologically; an aggregate only
/// ever holds keys of a single granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BucketKey {
    /// Calendar date.
    Day(NaiveDate),
    /// ISO-8601 week: weeks start Monday, week 1 contains the year's
    /// first Thursday. The year is the ISO week-year, not the calendar year.
    Week { year: i32, week: u32 },
    /// Calendar year and month.
    Month { year: i32, month: u32 },
}

impl BucketKey {
    /// Derive the bucket key for a sample under the given time basis.
    pub fn for_sample(sample: &Sample, granularity: Granularity, basis: TimeBasis) -> Self {
        let date = basis.civil_date(sample.time);
        match granularity {
            Granularity::Day => BucketKey::Day(date),
            Granularity::IsoWeek => {
                let iso = date.iso_week();
                BucketKey::Week { year: iso.year(), week: iso.week() }
            }
            Granularity::Month => BucketKey::Month { year: date.year(), month: date.month() },
        }
    }

    /// Representative date for plotting: the day itself, the ISO week's
    /// Monday, or the first of the month.
    pub fn start_date(&self) -> NaiveDate {
        match *self {
            BucketKey::Day(date) => date,
            BucketKey::Week { year, week } => {
                NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).unwrap_or(NaiveDate::MIN)
            }
            BucketKey::Month { year, month } => {
                NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
            }
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BucketKey::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            BucketKey::Week { year, week } => write!(f, "{year}-W{week:02}"),
            BucketKey::Month { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

/// Average heart rate over one calendar bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodAverage {
    pub key: BucketKey,
    /// Arithmetic mean of the raw BPM readings in this bucket.
    pub average: f64,
    /// Number of samples in this bucket, always at least 1.
    pub count: u64,
}

/// Group samples by calendar period and compute per-bucket means.
///
/// Output is chronological regardless of input order. An empty input
/// yields an empty result.
pub fn aggregate(samples: &[Sample], granularity: Granularity, basis: TimeBasis) -> Vec<PeriodAverage> {
    let mut buckets: BTreeMap<BucketKey, (f64, u64)> = BTreeMap::new();

    for sample in samples {
        let key = BucketKey::for_sample(sample, granularity, basis);
        let entry = buckets.entry(key).or_insert((0.0, 0));
        entry.0 += sample.bpm;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(key, (sum, count))| PeriodAverage {
            key,
            average: sum / count as f64,
            count,
        })
        .collect()
}

/// Aggregates for all three report granularities.
#[derive(Debug, Clone, Default)]
pub struct TrendReport {
    pub daily: Vec<PeriodAverage>,
    pub weekly: Vec<PeriodAverage>,
    pub monthly: Vec<PeriodAverage>,
}

impl TrendReport {
    /// Build daily, weekly, and monthly aggregates from one sample pass.
    pub fn build(samples: &[Sample], basis: TimeBasis) -> Self {
        Self {
            daily: aggregate(samples, Granularity::Day, basis),
            weekly: aggregate(samples, Granularity::IsoWeek, basis),
            monthly: aggregate(samples, Granularity::Month, basis),
        }
    }

    /// True when no samples contributed to any granularity.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }
}
