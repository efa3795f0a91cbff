//! Terminal UI layer for Sensor Dash.
//!
//! Provides themes, the tabbed chart views (time series, averages bar
//! chart, distribution, analysis text), and the main application event
//! loop built on top of [`ratatui`].

pub mod analysis_view;
pub mod app;
pub mod bar_view;
pub mod chart_view;
pub mod distribution_view;
pub mod themes;

pub use dash_core as core;
