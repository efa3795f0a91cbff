use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default readings file name probed when `--data-file` is not given.
const DEFAULT_DATA_FILE: &str = "sensor_data.csv";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.sensor-dash/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.sensor-dash/`
/// - `~/.sensor-dash/logs/`
/// - `~/.sensor-dash/data/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let dash_dir = home.join(".sensor-dash");
    std::fs::create_dir_all(&dash_dir)?;
    std::fs::create_dir_all(dash_dir.join("logs"))?;
    std::fs::create_dir_all(dash_dir.join("data"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    // Map conventional upper-case level names to tracing level names.
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-file resolution ───────────────────────────────────────────────────────

/// Resolve the readings file to load.
///
/// An explicit path always wins, even when it does not exist – a missing
/// explicit file should surface as the normal read failure rather than be
/// silently substituted. Otherwise the following candidates are probed in
/// order and the first that exists is returned:
/// 1. `./sensor_data.csv`
/// 2. `~/.sensor-dash/data/sensor_data.csv`
///
/// When neither exists, candidate 1 is returned anyway so the pipeline
/// reports the missing file and the dashboard opens empty.
pub fn resolve_data_file(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let cwd_candidate = PathBuf::from(DEFAULT_DATA_FILE);
    let home_candidate = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".sensor-dash")
        .join("data")
        .join(DEFAULT_DATA_FILE);

    if cwd_candidate.exists() {
        cwd_candidate
    } else if home_candidate.exists() {
        home_candidate
    } else {
        cwd_candidate
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
