use serde::{Deserialize, Serialize};

/// A single sensor measurement parsed from one line of the input file.
///
/// Readings are created by the loader and never mutated afterwards; every
/// derived structure is computed from an ordered slice of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Sensor identifier, taken verbatim from the input (no trimming).
    pub sensor: String,
    /// Measured value.
    pub value: f64,
    /// Measurement time as epoch milliseconds (UTC).
    pub timestamp_ms: i64,
}

/// Chronological value sequence for one sensor, ready for chart rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSeries {
    /// Sensor identifier.
    pub sensor: String,
    /// `(bucket, value)` pairs where `bucket` is the reading timestamp
    /// truncated to whole seconds (epoch seconds). Ordered by bucket
    /// ascending; when several readings share a bucket, the value of the
    /// one latest in input order is kept.
    pub points: Vec<(i64, f64)>,
}

/// Summary statistics for one sensor over the loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorStats {
    /// Sensor identifier.
    pub sensor: String,
    /// Arithmetic mean of all observed values.
    pub average: f64,
    /// Smallest observed value.
    pub minimum: f64,
    /// Largest observed value.
    pub maximum: f64,
}

impl SensorStats {
    /// Statistics for a sensor with no observations. Groups produced by the
    /// aggregator are never empty, so this only serves as the documented
    /// fallback value.
    pub fn empty(sensor: impl Into<String>) -> Self {
        Self {
            sensor: sensor.into(),
            average: 0.0,
            minimum: 0.0,
            maximum: 0.0,
        }
    }
}
