use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Sensor Dash.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line had enough fields but a numeric field did not parse.
    ///
    /// This aborts the whole load: no partial reading set is returned.
    /// Rows with too few fields are skipped instead and never raise this.
    #[error("Invalid {field} {value:?} on line {line}")]
    RecordParse {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
