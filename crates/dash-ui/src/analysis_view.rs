//! Analysis text tab and the shared "no data" placeholder.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::themes::Theme;

/// Render the analysis report text into `area`, scrolled down by `scroll`
/// lines.
pub fn render_analysis(frame: &mut Frame, area: Rect, report: &str, scroll: u16, theme: &Theme) {
    let paragraph = Paragraph::new(report.to_string())
        .style(theme.text)
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title_style(theme.title)
                .title(" Sensor Analysis "),
        );
    frame.render_widget(paragraph, area);
}

/// Render a placeholder when there are no readings to chart, including the
/// load failure reason when one was recorded.
pub fn render_no_data(frame: &mut Frame, area: Rect, load_error: Option<&str>, theme: &Theme) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("No sensor readings found", theme.warning)),
        Line::from(""),
    ];
    if let Some(reason) = load_error {
        lines.push(Line::from(Span::styled(reason.to_string(), theme.error)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Check the readings file passed via --data-file.",
        theme.dim,
    )));
    lines.push(Line::from(Span::styled(
        "Press 'q' or Ctrl+C to exit",
        theme.dim,
    )));

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title_style(theme.title)
                .title(" Sensor Dashboard "),
        ),
        area,
    );
}
