//! Per-sensor average bar chart.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use dash_core::formatting::format_value;
use dash_core::models::SensorStats;

use crate::themes::Theme;

/// Render one bar per sensor showing its average value.
///
/// Bar heights are `u64`, so averages are scaled by 100 to keep two
/// decimals of resolution; the true value is printed on the bar. Negative
/// averages clamp to a zero-height bar but keep their printed value.
pub fn render_average_bars(frame: &mut Frame, area: Rect, stats: &[SensorStats], theme: &Theme) {
    let bars: Vec<Bar> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let height = (s.average.max(0.0) * 100.0).round() as u64;
            Bar::default()
                .label(Line::from(s.sensor.clone()))
                .value(height)
                .text_value(format_value(s.average))
                .style(theme.series_style(i))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title_style(theme.title)
                .title(" Average Sensor Values "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area, stats.len()))
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Pick a bar width that fits `count` bars (plus gaps) into `area`,
/// clamped to a readable range.
fn bar_width(area: Rect, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(2); // borders
    let per_bar = inner / count as u16;
    per_bar.saturating_sub(1).clamp(3, 12)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
