mod bootstrap;

use anyhow::Result;
use dash_core::settings::Settings;
use dash_data::analysis::build_dashboard;
use dash_ui::app::{App, Tab};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Sensor Dash v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    let data_file = bootstrap::resolve_data_file(settings.data_file.as_deref());
    tracing::info!("Loading readings from {}", data_file.display());

    // One-shot pipeline: load, group, derive. The snapshot is handed to the
    // UI and never recomputed while the app runs.
    let data = build_dashboard(&data_file);
    tracing::info!(
        "Loaded {} readings across {} sensors in {:.3}s",
        data.metadata.readings_loaded,
        data.metadata.sensors_found,
        data.metadata.load_time_seconds + data.metadata.aggregate_time_seconds,
    );

    let app = App::new(&settings.theme, Tab::from_name(&settings.view));

    // Listen for Ctrl+C at the OS level as well, so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run(data) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down");
        }
    }

    Ok(())
}
