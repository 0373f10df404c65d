use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ExplorerError, Result};

/// Keeps the file writer alive for the lifetime of the application
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const DEFAULT_FILTER: &str = "warn,gateway_explorer=info";

/// Initialize the application logger with both console and file outputs
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "explorer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = GUARD.set(guard);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::builder().parse(DEFAULT_FILTER))
        .map_err(|e| ExplorerError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer() // Console layer
            .with_target(true)
            .with_file(true)
            .with_line_number(true))
        .with(fmt::layer() // File layer
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true))
        .try_init()
        .map_err(|e| ExplorerError::Logging(e.to_string()))?;

    tracing::info!("Logging initialized");
    Ok(())
}

/// Initialize simple console-only logging for development
pub fn init_simple(level: Level) -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| {
            let filter_str = format!("warn,gateway_explorer={}", level.as_str().to_lowercase());
            EnvFilter::builder().parse(filter_str)
        })
        .map_err(|e| ExplorerError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true))
        .try_init()
        .map_err(|e| ExplorerError::Logging(e.to_string()))?;

    tracing::info!("Simple logging initialized at level {}", level);
    Ok(())
}

/// Directory where log files are stored
fn get_log_directory() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ExplorerError::Logging("no home directory".to_string()))?;
    Ok(home_dir.join(".gateway-explorer").join("logs"))
}
