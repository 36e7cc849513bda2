// Company value history: decoded entries, parsed samples and the normalized series
use crate::error::FetchError;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

/// Display format for axis labels ("Mar 01").
pub const LABEL_FORMAT: &str = "%b %d";

/// 0001-01-01T00:00:00Z, the stand-in instant for unparsable timestamps.
const UNPARSABLE_TIMESTAMP_SECS: i64 = -62_135_596_800;

/// One decoded history entry, timestamp still unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub date: String,
    pub value: f64,
}

impl HistoryEntry {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// What to do with a history entry whose timestamp is not RFC 3339.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPolicy {
    /// Reject the whole history.
    #[default]
    Strict,
    /// Keep the entry at the zero instant so it sorts first.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<FixedOffset>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<FixedOffset>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Parse the entry at `index` under the given policy.
    pub fn parse(
        index: usize,
        entry: &HistoryEntry,
        policy: TimestampPolicy,
    ) -> Result<Self, FetchError> {
        match DateTime::parse_from_rfc3339(&entry.date) {
            Ok(timestamp) => Ok(Self::new(timestamp, entry.value)),
            Err(source) => match policy {
                TimestampPolicy::Strict => Err(FetchError::InvalidTimestamp {
                    index,
                    value: entry.date.clone(),
                    source,
                }),
                TimestampPolicy::Lenient => {
                    tracing::warn!(
                        "History sample {} has unparsable date {:?} ({}); placing it first",
                        index,
                        entry.date,
                        source
                    );
                    Ok(Self::new(unparsable_timestamp(), entry.value))
                }
            },
        }
    }
}

fn unparsable_timestamp() -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp(UNPARSABLE_TIMESTAMP_SECS, 0)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .fixed_offset()
}

/// Samples in chronological order. Equal timestamps keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        // sort_by_key is stable
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    /// Parse and order decoded entries.
    pub fn from_entries(
        entries: &[HistoryEntry],
        policy: TimestampPolicy,
    ) -> Result<Self, FetchError> {
        let samples = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Sample::parse(index, entry, policy))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_samples(samples))
    }

    pub fn to_renderable(&self) -> RenderableSeries {
        let (values, dates) = self
            .samples
            .iter()
            .map(|s| (s.value, s.timestamp.format(LABEL_FORMAT).to_string()))
            .unzip();
        RenderableSeries { values, dates }
    }
}

/// Parallel values and display labels, same length and order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderableSeries {
    pub values: Vec<f64>,
    pub dates: Vec<String>,
}

impl RenderableSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn entry(date: &str, value: f64) -> HistoryEntry {
        HistoryEntry::new(date, value)
    }

    #[test]
    fn test_orders_chronologically() {
        let entries = vec![
            entry("2023-03-02T00:00:00Z", 100.0),
            entry("2023-03-01T00:00:00Z", 90.0),
        ];

        let renderable = Series::from_entries(&entries, TimestampPolicy::Strict)
            .unwrap()
            .to_renderable();

        assert_eq!(renderable.values, vec![90.0, 100.0]);
        assert_eq!(renderable.dates, vec!["Mar 01", "Mar 02"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let entries = vec![
            entry("2023-05-02T12:00:00Z", 3.0),
            entry("2023-05-01T12:00:00Z", 1.0),
            entry("2023-05-02T12:00:00Z", 4.0),
            entry("2023-05-01T12:00:00Z", 2.0),
            // same instant, different offset
            entry("2023-05-02T14:00:00+02:00", 5.0),
        ];

        let renderable = Series::from_entries(&entries, TimestampPolicy::Strict)
            .unwrap()
            .to_renderable();

        assert_eq!(renderable.values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(renderable.dates, vec!["May 01", "May 01", "May 02", "May 02", "May 02"]);
    }

    #[test]
    fn test_lengths_match_input() {
        let start = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();
        let entries: Vec<HistoryEntry> = (0..37)
            .map(|day| {
                let ts = start + chrono::Duration::days(36 - day);
                entry(&ts.to_rfc3339(), day as f64)
            })
            .collect();

        let renderable = Series::from_entries(&entries, TimestampPolicy::Strict)
            .unwrap()
            .to_renderable();

        assert_eq!(renderable.len(), entries.len());
        assert_eq!(renderable.dates.len(), entries.len());
        assert_eq!(renderable.values.first(), Some(&36.0));
        assert_eq!(renderable.values.last(), Some(&0.0));
    }

    #[test]
    fn test_label_uses_sample_offset() {
        let entries = vec![entry("2023-12-31T23:30:00-05:00", 1.0)];

        let renderable = Series::from_entries(&entries, TimestampPolicy::Strict)
            .unwrap()
            .to_renderable();

        assert_eq!(renderable.dates, vec!["Dec 31"]);
    }

    #[test]
    fn test_strict_policy_rejects_bad_timestamp() {
        let entries = vec![
            entry("2023-03-01T00:00:00Z", 1.0),
            entry("03/02/2023", 2.0),
        ];

        let err = Series::from_entries(&entries, TimestampPolicy::Strict).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        match err {
            FetchError::InvalidTimestamp { index, value, .. } => {
                assert_eq!(index, 1);
                assert_eq!(value, "03/02/2023");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_policy_sorts_bad_timestamps_first() {
        let entries = vec![
            entry("2023-03-01T00:00:00Z", 1.0),
            entry("not a date", 2.0),
            entry("", 3.0),
        ];

        let renderable = Series::from_entries(&entries, TimestampPolicy::Lenient)
            .unwrap()
            .to_renderable();

        assert_eq!(renderable.values, vec![2.0, 3.0, 1.0]);
        assert_eq!(renderable.dates, vec!["Jan 01", "Jan 01", "Mar 01"]);
    }

    #[test]
    fn test_empty_entries_give_empty_series() {
        let series = Series::from_entries(&[], TimestampPolicy::Strict).unwrap();
        assert!(series.to_renderable().is_empty());
    }
}
