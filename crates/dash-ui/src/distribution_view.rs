//! Distribution view: each sensor's share of the summed averages.
//!
//! The weights are the same per-sensor averages shown in the bar chart;
//! shares are rendered as text bars, one row per sensor.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use dash_core::formatting::{format_value, percentage};
use dash_core::models::SensorStats;

use crate::themes::Theme;

const BAR_WIDTH: usize = 30;

/// Render the distribution rows into `area`.
pub fn render_distribution(frame: &mut Frame, area: Rect, stats: &[SensorStats], theme: &Theme) {
    let paragraph = Paragraph::new(Text::from(build_distribution_lines(stats, theme))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title_style(theme.title)
            .title(" Sensor Value Distribution "),
    );
    frame.render_widget(paragraph, area);
}

/// Build the row lines (extracted for testability).
///
/// Each row: padded sensor label, a share bar, the share percentage, and
/// the underlying average. Shares are zero when the summed averages are
/// not positive, since a share of a non-positive total has no meaning.
pub fn build_distribution_lines<'a>(stats: &[SensorStats], theme: &'a Theme) -> Vec<Line<'a>> {
    let total: f64 = stats.iter().map(|s| s.average).sum();
    let label_width = stats
        .iter()
        .map(|s| s.sensor.width())
        .max()
        .unwrap_or(0)
        .max(6);

    let mut lines: Vec<Line<'a>> = Vec::with_capacity(stats.len() + 2);
    lines.push(Line::from(Span::styled(
        "Share of summed sensor averages",
        theme.dim,
    )));
    lines.push(Line::from(""));

    for (i, s) in stats.iter().enumerate() {
        let share = if total > 0.0 {
            percentage(s.average, total, 1)
        } else {
            0.0
        };
        let (filled, empty) = build_bar(share, BAR_WIDTH);
        let padding = label_width.saturating_sub(s.sensor.width());

        lines.push(Line::from(vec![
            Span::styled(format!("{}{} ", s.sensor, " ".repeat(padding)), theme.label),
            Span::styled("[", theme.dim),
            Span::styled(filled, theme.series_style(i)),
            Span::styled(empty, theme.bar_empty),
            Span::styled("] ", theme.dim),
            Span::styled(format!("{:>5.1}%", share), theme.value),
            Span::styled("  avg ", theme.dim),
            Span::styled(format_value(s.average), theme.text),
        ]));
    }

    lines
}

/// Split a share percentage into filled and empty bar segments.
fn build_bar(share: f64, width: usize) -> (String, String) {
    let filled = ((share / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    (
        "\u{2588}".repeat(filled),        // █  FULL BLOCK
        "\u{2591}".repeat(width - filled), // ░  LIGHT SHADE
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(sensor: &str, average: f64) -> SensorStats {
        SensorStats {
            sensor: sensor.to_string(),
            average,
            minimum: average,
            maximum: average,
        }
    }

    // ── build_bar ─────────────────────────────────────────────────────────────

    #[test]
    fn test_build_bar_half() {
        let (filled, empty) = build_bar(50.0, 30);
        assert_eq!(filled.chars().count(), 15);
        assert_eq!(empty.chars().count(), 15);
    }

    #[test]
    fn test_build_bar_full_and_empty() {
        let (filled, empty) = build_bar(100.0, 30);
        assert_eq!(filled.chars().count(), 30);
        assert!(empty.is_empty());

        let (filled, empty) = build_bar(0.0, 30);
        assert!(filled.is_empty());
        assert_eq!(empty.chars().count(), 30);
    }

    #[test]
    fn test_build_bar_never_overflows() {
        let (filled, _) = build_bar(250.0, 30);
        assert_eq!(filled.chars().count(), 30);
    }

    // ── build_distribution_lines ──────────────────────────────────────────────

    #[test]
    fn test_distribution_one_row_per_sensor() {
        let theme = Theme::dark();
        let rows = build_distribution_lines(&[stats("a", 10.0), stats("b", 30.0)], &theme);
        // Caption + blank + one row per sensor.
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_distribution_shares_from_averages() {
        let theme = Theme::dark();
        let rows = build_distribution_lines(&[stats("a", 10.0), stats("b", 30.0)], &theme);

        let row_a: String = rows[2].spans.iter().map(|s| s.content.as_ref()).collect();
        let row_b: String = rows[3].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(row_a.contains("25.0%"), "got: {row_a}");
        assert!(row_b.contains("75.0%"), "got: {row_b}");
    }

    #[test]
    fn test_distribution_non_positive_total_gives_zero_shares() {
        let theme = Theme::dark();
        let rows = build_distribution_lines(&[stats("a", -1.0), stats("b", 1.0)], &theme);

        for row in &rows[2..] {
            let text: String = row.spans.iter().map(|s| s.content.as_ref()).collect();
            assert!(text.contains("0.0%"), "got: {text}");
        }
    }
}
