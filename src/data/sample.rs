//! Heart-rate samples and the time basis used for calendar bucketing.

use chrono::{DateTime, Local, NaiveDate, Utc};
use clap::ValueEnum;

/// A single timestamped heart-rate reading.
///
/// Samples are immutable once read from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Instant the reading was taken, millisecond precision.
    pub time: DateTime<Utc>,
    /// Heart rate in beats per minute.
    pub bpm: f64,
}

impl Sample {
    /// Create a sample from an epoch-millisecond timestamp.
    ///
    /// Returns `None` if the timestamp is outside chrono's representable range.
    pub fn from_epoch_millis(millis: i64, bpm: f64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|time| Self { time, bpm })
    }
}

/// Time basis for splitting samples into calendar periods.
///
/// Bucket boundaries move with the zone: a reading taken late at night can
/// fall on different calendar days in local time and UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeBasis {
    /// System local time, matching what the wearer's device showed.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

impl TimeBasis {
    /// Calendar date of an instant under this basis.
    pub fn civil_date(&self, time: DateTime<Utc>) -> NaiveDate {
        match self {
            TimeBasis::Local => time.with_timezone(&Local).date_naive(),
            TimeBasis::Utc => time.date_naive(),
        }
    }
}
