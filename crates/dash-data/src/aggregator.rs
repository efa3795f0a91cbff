//! Per-sensor grouping and derivation of series and statistics.

use std::collections::{BTreeMap, HashMap};

use dash_core::models::{Reading, SensorSeries, SensorStats};
use dash_core::time_utils::bucket_second;

/// Stateless helper that groups readings by sensor and derives the
/// structures consumed by the chart and analysis views.
pub struct SensorAggregator;

impl SensorAggregator {
    /// Group `readings` by sensor id.
    ///
    /// Input order is preserved within each group; map iteration order is
    /// unspecified. A sensor with zero readings never appears.
    pub fn group_by_sensor(readings: &[Reading]) -> HashMap<String, Vec<Reading>> {
        let mut groups: HashMap<String, Vec<Reading>> = HashMap::new();
        for reading in readings {
            groups
                .entry(reading.sensor.clone())
                .or_default()
                .push(reading.clone());
        }
        groups
    }

    /// Build the time series for one sensor's group.
    ///
    /// Timestamps are truncated to whole-second buckets; when several
    /// readings land in the same bucket the one latest in input order wins.
    /// Points come out ordered by bucket ascending.
    pub fn build_series(sensor: &str, group: &[Reading]) -> SensorSeries {
        // BTreeMap keeps buckets sorted; inserting twice overwrites, which
        // gives last-write-wins for free.
        let mut buckets: BTreeMap<i64, f64> = BTreeMap::new();
        for reading in group {
            buckets.insert(bucket_second(reading.timestamp_ms), reading.value);
        }

        SensorSeries {
            sensor: sensor.to_string(),
            points: buckets.into_iter().collect(),
        }
    }

    /// Compute average, minimum, and maximum for one sensor's group in a
    /// single pass. Duplicate values count multiple times.
    pub fn build_stats(sensor: &str, group: &[Reading]) -> SensorStats {
        if group.is_empty() {
            return SensorStats::empty(sensor);
        }

        let mut sum = 0.0;
        let mut minimum = f64::INFINITY;
        let mut maximum = f64::NEG_INFINITY;
        for reading in group {
            sum += reading.value;
            minimum = minimum.min(reading.value);
            maximum = maximum.max(reading.value);
        }

        SensorStats {
            sensor: sensor.to_string(),
            average: sum / group.len() as f64,
            minimum,
            maximum,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_reading(sensor: &str, value: f64, timestamp_ms: i64) -> Reading {
        Reading {
            sensor: sensor.to_string(),
            value,
            timestamp_ms,
        }
    }

    // ── group_by_sensor ───────────────────────────────────────────────────────

    #[test]
    fn test_group_by_sensor_empty_input() {
        let groups = SensorAggregator::group_by_sensor(&[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_by_sensor_splits_by_id() {
        let readings = vec![
            make_reading("A", 1.0, 1000),
            make_reading("B", 5.0, 1000),
            make_reading("A", 3.0, 61_000),
        ];
        let groups = SensorAggregator::group_by_sensor(&readings);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["A"].len(), 2);
        assert_eq!(groups["B"].len(), 1);
    }

    #[test]
    fn test_group_by_sensor_preserves_input_order_within_group() {
        let readings = vec![
            make_reading("A", 3.0, 3000),
            make_reading("A", 1.0, 1000),
            make_reading("A", 2.0, 2000),
        ];
        let groups = SensorAggregator::group_by_sensor(&readings);

        let values: Vec<f64> = groups["A"].iter().map(|r| r.value).collect();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    // ── build_series ──────────────────────────────────────────────────────────

    #[test]
    fn test_build_series_buckets_to_seconds() {
        let group = vec![
            make_reading("A", 1.0, 1000),
            make_reading("A", 3.0, 61_000),
        ];
        let series = SensorAggregator::build_series("A", &group);

        assert_eq!(series.points, vec![(1, 1.0), (61, 3.0)]);
    }

    #[test]
    fn test_build_series_same_second_keeps_later_reading() {
        // 1000 ms and 1999 ms share the bucket for second 1.
        let group = vec![
            make_reading("A", 10.0, 1000),
            make_reading("A", 20.0, 1999),
        ];
        let series = SensorAggregator::build_series("A", &group);

        assert_eq!(series.points, vec![(1, 20.0)]);
    }

    #[test]
    fn test_build_series_ordered_by_bucket_ascending() {
        let group = vec![
            make_reading("A", 3.0, 30_000),
            make_reading("A", 1.0, 10_000),
            make_reading("A", 2.0, 20_000),
        ];
        let series = SensorAggregator::build_series("A", &group);

        let buckets: Vec<i64> = series.points.iter().map(|p| p.0).collect();
        assert_eq!(buckets, vec![10, 20, 30]);
    }

    #[test]
    fn test_build_series_empty_group() {
        let series = SensorAggregator::build_series("A", &[]);
        assert!(series.points.is_empty());
    }

    // ── build_stats ───────────────────────────────────────────────────────────

    #[test]
    fn test_build_stats_average_min_max() {
        let group = vec![
            make_reading("A", 10.0, 1000),
            make_reading("A", 20.0, 2000),
            make_reading("A", 30.0, 3000),
        ];
        let stats = SensorAggregator::build_stats("A", &group);

        assert_eq!(stats.average, 20.0);
        assert_eq!(stats.minimum, 10.0);
        assert_eq!(stats.maximum, 30.0);
    }

    #[test]
    fn test_build_stats_duplicates_count_each_time() {
        let group = vec![
            make_reading("A", 10.0, 1000),
            make_reading("A", 10.0, 2000),
            make_reading("A", 40.0, 3000),
        ];
        let stats = SensorAggregator::build_stats("A", &group);

        assert_eq!(stats.average, 20.0);
    }

    #[test]
    fn test_build_stats_single_reading() {
        let group = vec![make_reading("B", 5.0, 1000)];
        let stats = SensorAggregator::build_stats("B", &group);

        assert_eq!(stats.average, 5.0);
        assert_eq!(stats.minimum, 5.0);
        assert_eq!(stats.maximum, 5.0);
    }

    #[test]
    fn test_build_stats_negative_values() {
        let group = vec![
            make_reading("A", -5.0, 1000),
            make_reading("A", 5.0, 2000),
        ];
        let stats = SensorAggregator::build_stats("A", &group);

        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.minimum, -5.0);
        assert_eq!(stats.maximum, 5.0);
    }

    #[test]
    fn test_build_stats_empty_group_fallback() {
        let stats = SensorAggregator::build_stats("A", &[]);
        assert_eq!(stats, SensorStats::empty("A"));
    }

    // ── round trip ────────────────────────────────────────────────────────────

    #[test]
    fn test_group_then_derive_round_trip() {
        let readings = vec![
            make_reading("A", 1.0, 1000),
            make_reading("A", 3.0, 61_000),
            make_reading("B", 5.0, 1000),
        ];
        let groups = SensorAggregator::group_by_sensor(&readings);

        let a = SensorAggregator::build_stats("A", &groups["A"]);
        assert_eq!(a.average, 2.0);
        assert_eq!(a.minimum, 1.0);
        assert_eq!(a.maximum, 3.0);

        let b = SensorAggregator::build_stats("B", &groups["B"]);
        assert_eq!(b.average, 5.0);
        assert_eq!(b.minimum, 5.0);
        assert_eq!(b.maximum, 5.0);
    }
}
