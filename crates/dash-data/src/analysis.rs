//! Top-level pipeline for Sensor Dash.
//!
//! Loads the readings file, applies the error-recovery policy, derives the
//! per-sensor series and statistics, and returns a [`DashboardData`]
//! snapshot ready for the UI layer.

use std::path::Path;

use chrono::Utc;
use dash_core::error::DashboardError;
use dash_core::formatting::format_value;
use dash_core::models::{SensorSeries, SensorStats};
use tracing::{error, warn};

use crate::aggregator::SensorAggregator;
use crate::reader::load_readings;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the dashboard snapshot.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this snapshot was generated.
    pub generated_at: String,
    /// Number of readings loaded from the file.
    pub readings_loaded: usize,
    /// Number of distinct sensors observed.
    pub sensors_found: usize,
    /// Wall-clock seconds spent reading and parsing the file.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent grouping and deriving.
    pub aggregate_time_seconds: f64,
}

/// The complete output of [`build_dashboard`], consumed by every view.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// One time series per sensor, sorted by sensor id.
    pub series: Vec<SensorSeries>,
    /// One stats record per sensor, sorted by sensor id.
    pub stats: Vec<SensorStats>,
    /// Human-readable reason when the load produced no data because of an
    /// error, shown in the UI placeholder.
    pub load_error: Option<String>,
    /// Metadata about this pipeline run.
    pub metadata: AnalysisMetadata,
}

impl DashboardData {
    /// `true` when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline against the readings file at `path`.
///
/// 1. Load readings via [`load_readings`].
/// 2. Group by sensor.
/// 3. Derive series and statistics, sorted by sensor id.
///
/// Error policy: an unreadable file is logged and the dashboard opens with
/// an empty dataset; a numeric parse failure aborts the whole load (the
/// loader returns no partial data) and is handled the same way downstream.
/// Both reasons are surfaced through [`DashboardData::load_error`].
pub fn build_dashboard(path: &Path) -> DashboardData {
    // ── Step 1: Load readings ─────────────────────────────────────────────────
    let load_start = std::time::Instant::now();
    let (readings, load_error) = match load_readings(path) {
        Ok(readings) => (readings, None),
        Err(err @ DashboardError::FileRead { .. }) => {
            warn!("Continuing with empty dataset: {}", err);
            (Vec::new(), Some(err.to_string()))
        }
        Err(err) => {
            error!("Load aborted, no partial data kept: {}", err);
            (Vec::new(), Some(err.to_string()))
        }
    };
    let load_time = load_start.elapsed().as_secs_f64();

    // ── Step 2 + 3: Group and derive ──────────────────────────────────────────
    let aggregate_start = std::time::Instant::now();
    let groups = SensorAggregator::group_by_sensor(&readings);

    // Map iteration order is unspecified; the rendering boundary wants a
    // stable lexicographic order, so sort the ids once here.
    let mut sensors: Vec<&String> = groups.keys().collect();
    sensors.sort();

    let series: Vec<SensorSeries> = sensors
        .iter()
        .map(|sensor| SensorAggregator::build_series(sensor, &groups[*sensor]))
        .collect();
    let stats: Vec<SensorStats> = sensors
        .iter()
        .map(|sensor| SensorAggregator::build_stats(sensor, &groups[*sensor]))
        .collect();
    let aggregate_time = aggregate_start.elapsed().as_secs_f64();

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        readings_loaded: readings.len(),
        sensors_found: stats.len(),
        load_time_seconds: load_time,
        aggregate_time_seconds: aggregate_time,
    };

    DashboardData {
        series,
        stats,
        load_error,
        metadata,
    }
}

/// Render the analysis-tab text: a fixed header followed by one block per
/// sensor with average, minimum, and maximum at two decimal places, blocks
/// separated by a blank line. Header-only for an empty dataset.
pub fn render_report(stats: &[SensorStats]) -> String {
    let mut report = String::from("Sensor Analysis\n\n");
    for s in stats {
        report.push_str(&format!(
            "Sensor: {}\nAverage: {}\nMinimum: {}\nMaximum: {}\n\n",
            s.sensor,
            format_value(s.average),
            format_value(s.minimum),
            format_value(s.maximum),
        ));
    }
    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────
