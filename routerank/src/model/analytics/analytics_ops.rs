use crate::model::persistence::AnalysisRecord;
use chrono::{DateTime, Duration, Utc};
use uom::si::f64::Time;
use uom::si::time::{minute, second};

/// records analyzed at or after `now - days`.
pub fn records_within(
    records: &[AnalysisRecord],
    now: DateTime<Utc>,
    days: u32,
) -> Vec<&AnalysisRecord> {
    let cutoff = now - Duration::days(days as i64);
    records.iter().filter(|r| r.timestamp >= cutoff).collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

pub(super) fn seconds_to_minutes(seconds: f64) -> f64 {
    Time::new::<second>(seconds).get::<minute>()
}

pub(super) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


#[cfg(test)]
mod test {
    use super::{mean, records_within, seconds_to_minutes, std_dev, test_records::record};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_statistics() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        let sd = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).expect("should compute std");
        assert!((sd - 2.0).abs() < 1e-12);
        assert!((seconds_to_minutes(90.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_window() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        let records = vec![
            record("a→b_route0", now - Duration::days(1), 100.0, 100.0),
            record("a→b_route0", now - Duration::days(30), 100.0, 100.0),
            record("a→b_route0", now - Duration::days(31), 100.0, 100.0),
        ];
        assert_eq!(records_within(&records, now, 30).len(), 2);
        assert_eq!(records_within(&records, now, 7).len(), 1);
    }
}
