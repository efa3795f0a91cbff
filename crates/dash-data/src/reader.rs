//! CSV record loading for Sensor Dash.
//!
//! Reads `sensor_id,value,timestamp_millis` lines and converts them into
//! [`Reading`] structs for downstream aggregation.

use std::io::BufRead;
use std::path::Path;

use dash_core::error::{DashboardError, Result};
use dash_core::models::Reading;
use tracing::debug;

/// Load and parse the readings file at `path`.
///
/// The first line is a header and is discarded unconditionally, so a file
/// with no data lines (or no lines at all) yields an empty vector. Each
/// data line is split on `','` with no quoting support:
///
/// * fewer than 3 fields → the row is skipped silently;
/// * field 1 not a float, or field 2 not an integer → the WHOLE load fails
///   with [`DashboardError::RecordParse`] and no partial result.
///
/// The returned vector preserves file line order. An unreadable file fails
/// with [`DashboardError::FileRead`], which callers handle separately from
/// a parse failure.
pub fn load_readings(path: &Path) -> Result<Vec<Reading>> {
    let file = std::fs::File::open(path).map_err(|e| DashboardError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut readings: Vec<Reading> = Vec::new();
    let mut rows_skipped = 0u64;

    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| DashboardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Line 1 is the header.
        if index == 0 {
            continue;
        }
        let line_no = index + 1;

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            rows_skipped += 1;
            continue;
        }

        let value: f64 = fields[1].parse().map_err(|_| DashboardError::RecordParse {
            line: line_no,
            field: "value",
            value: fields[1].to_string(),
        })?;
        let timestamp_ms: i64 = fields[2].parse().map_err(|_| DashboardError::RecordParse {
            line: line_no,
            field: "timestamp",
            value: fields[2].to_string(),
        })?;

        readings.push(Reading {
            sensor: fields[0].to_string(),
            value,
            timestamp_ms,
        });
    }

    debug!(
        "File {}: {} readings parsed, {} short rows skipped",
        path.display(),
        readings.len(),
        rows_skipped
    );

    Ok(readings)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
