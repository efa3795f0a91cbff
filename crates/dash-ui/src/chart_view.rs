//! Time-series line chart: one dataset per sensor over bucketed points.

use ratatui::{
    layout::Rect,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use dash_core::formatting::format_number;
use dash_core::models::SensorSeries;
use dash_core::time_utils::format_bucket;

use crate::themes::Theme;

/// Render the time-series chart for all sensors into `area`.
///
/// The x axis is the second bucket (UTC), the y axis the reading value.
/// Bounds are computed from the data with a small padding so that flat or
/// single-point series still get a visible drawing range.
pub fn render_time_series(frame: &mut Frame, area: Rect, series: &[SensorSeries], theme: &Theme) {
    // Owned point sets first; `Dataset` borrows slices.
    let point_sets: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| {
            s.points
                .iter()
                .map(|&(bucket, value)| (bucket as f64, value))
                .collect()
        })
        .collect();

    let (x_bounds, y_bounds) = chart_bounds(&point_sets);

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(point_sets.iter())
        .enumerate()
        .map(|(i, (s, points))| {
            Dataset::default()
                .name(s.sensor.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme.series_style(i))
                .data(points)
        })
        .collect();

    let x_labels = vec![
        format_bucket(x_bounds[0] as i64),
        format_bucket(((x_bounds[0] + x_bounds[1]) / 2.0) as i64),
        format_bucket(x_bounds[1] as i64),
    ];
    let y_labels = vec![
        format_number(y_bounds[0], 1),
        format_number((y_bounds[0] + y_bounds[1]) / 2.0, 1),
        format_number(y_bounds[1], 1),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title_style(theme.title)
                .title(" Sensor Values Over Time "),
        )
        .x_axis(
            Axis::default()
                .title("Time")
                .style(theme.axis)
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(theme.axis)
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Compute padded `[x, y]` axis bounds over all point sets.
///
/// Degenerate extents (no points, or all points equal) expand to a unit
/// range so the chart never collapses to a zero-width window.
fn chart_bounds(point_sets: &[Vec<(f64, f64)>]) -> ([f64; 2], [f64; 2]) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for points in point_sets {
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    (pad_range(x_min, x_max, 0.0), pad_range(y_min, y_max, 0.05))
}

/// Widen `[min, max]` by `fraction` of its extent, or by one unit when the
/// extent is zero.
fn pad_range(min: f64, max: f64, fraction: f64) -> [f64; 2] {
    if min == max {
        return [min - 1.0, max + 1.0];
    }
    let pad = (max - min) * fraction;
    [min - pad, max + pad]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
