//! Core domain layer for Sensor Dash.
//!
//! Holds the sensor reading data model, the error taxonomy, formatting and
//! time-bucket helpers, and the CLI settings shared by the data and UI
//! layers. This crate performs no I/O beyond settings persistence.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
