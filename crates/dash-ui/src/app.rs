//! Main application state and TUI event loop for Sensor Dash.
//!
//! [`App`] owns the theme, the active tab, and the analysis scroll
//! position. It drives the tabbed event loop over a loaded
//! [`DashboardData`] snapshot; rendering is pure over that snapshot.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Tabs,
    Frame, Terminal,
};

use dash_data::analysis::{render_report, DashboardData};

use crate::themes::Theme;
use crate::{analysis_view, bar_view, chart_view, distribution_view};

// ── Tab ───────────────────────────────────────────────────────────────────────

/// The four dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Time-series line chart.
    Line,
    /// Per-sensor average bar chart.
    Bar,
    /// Share-of-averages distribution view.
    Distribution,
    /// Textual per-sensor summary.
    Analysis,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Line, Tab::Bar, Tab::Distribution, Tab::Analysis];

    /// Display title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Line => "Line Chart",
            Tab::Bar => "Bar Chart",
            Tab::Distribution => "Distribution",
            Tab::Analysis => "Analysis",
        }
    }

    /// Position within [`Tab::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse a settings `--view` name. Unknown names fall back to the line
    /// chart.
    pub fn from_name(name: &str) -> Tab {
        match name {
            "bar" => Tab::Bar,
            "distribution" => Tab::Distribution,
            "analysis" => Tab::Analysis,
            _ => Tab::Line,
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the Sensor Dash TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Currently selected tab.
    pub tab: Tab,
    /// Scroll offset of the analysis text, in lines.
    pub scroll: u16,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, start_tab: Tab) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            tab: start_tab,
            scroll: 0,
            should_quit: false,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the tabbed dashboard over a loaded snapshot until the user quits.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout; the loop exits
    /// on `q`, `Q`, or `Ctrl+C`.
    pub async fn run(mut self, data: DashboardData) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // The report text never changes while the app runs.
        let report = render_report(&data.stats);
        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame, &data, &report))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,

            KeyCode::Tab | KeyCode::Right => self.tab = self.tab.next(),
            KeyCode::BackTab | KeyCode::Left => self.tab = self.tab.prev(),
            KeyCode::Char('1') => self.tab = Tab::Line,
            KeyCode::Char('2') => self.tab = Tab::Bar,
            KeyCode::Char('3') => self.tab = Tab::Distribution,
            KeyCode::Char('4') => self.tab = Tab::Analysis,

            KeyCode::Up if self.tab == Tab::Analysis => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down if self.tab == Tab::Analysis => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::PageUp if self.tab == Tab::Analysis => {
                self.scroll = self.scroll.saturating_sub(10);
            }
            KeyCode::PageDown if self.tab == Tab::Analysis => {
                self.scroll = self.scroll.saturating_add(10);
            }
            _ => {}
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame, data: &DashboardData, report: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(frame.area());

        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(self.tab.index())
            .style(self.theme.tab)
            .highlight_style(self.theme.tab_active)
            .divider("|");
        frame.render_widget(tabs, chunks[0]);

        let body = chunks[1];
        match self.tab {
            // Chart tabs fall back to a placeholder when there is nothing
            // to draw; the analysis tab always shows the (possibly
            // header-only) report.
            Tab::Line if data.is_empty() => {
                analysis_view::render_no_data(frame, body, data.load_error.as_deref(), &self.theme)
            }
            Tab::Bar if data.is_empty() => {
                analysis_view::render_no_data(frame, body, data.load_error.as_deref(), &self.theme)
            }
            Tab::Distribution if data.is_empty() => {
                analysis_view::render_no_data(frame, body, data.load_error.as_deref(), &self.theme)
            }
            Tab::Line => chart_view::render_time_series(frame, body, &data.series, &self.theme),
            Tab::Bar => bar_view::render_average_bars(frame, body, &data.stats, &self.theme),
            Tab::Distribution => {
                distribution_view::render_distribution(frame, body, &data.stats, &self.theme)
            }
            Tab::Analysis => {
                analysis_view::render_analysis(frame, body, report, self.scroll, &self.theme)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
