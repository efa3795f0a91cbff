//! Data ingestion layer for Sensor Dash.
//!
//! Responsible for reading and parsing the CSV readings file, grouping
//! readings by sensor, deriving per-sensor series and statistics, and
//! running the top-level pipeline that produces the dashboard snapshot.

pub mod aggregator;
pub mod analysis;
pub mod reader;

pub use dash_core as core;
