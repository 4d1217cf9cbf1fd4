// Identity Lens - terminal dashboard comparing identity architectures
//
// Traditional, blockchain-based and hybrid identity systems side by side:
// performance and adoption figures, animated architecture flows, a capability
// radar and sector use cases.
//
// Architecture:
// - Model: built-in catalog of architectures and use cases (validated at load)
// - Diagram: pure projection of an architecture into drawable boxes and flows
// - Animator: step timer driving the active flow, ticks over an mpsc channel
// - Controller: panel selection, animation and detail overlay state
// - TUI (ratatui): panels, canvas painters, key dispatch

mod advisory;
mod animator;
mod cli;
mod config;
mod controller;
mod dataset;
mod diagram;
mod logging;
mod model;
mod overlay;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use model::Catalog;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter for the TUI run: RUST_LOG wins over the configured level
fn env_filter(level: &str) -> EnvFilter {
    let default_filter = format!("identity_lens={}", level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Non-blocking rolling file writer, if file logging is enabled and the
/// directory can be created
fn file_writer(
    logging: &LoggingConfig,
) -> Option<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    if !logging.file_enabled {
        return None;
    }
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };
    Some(tracing_appender::non_blocking(appender))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Headless commands log to stderr so stdout stays clean for JSON output
    if cli.command.is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter("warn"))
            .init();
        if cli::handle_cli(&cli) {
            return Ok(());
        }
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // The TUI owns the screen: capture logs into the buffer for the logs panel.
    // File logging is optional and JSON formatted.
    // The guard must stay alive until exit so buffered lines are flushed.
    let log_buffer = LogBuffer::new();
    let (file_layer, _file_guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(&config.logging.level))
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    let catalog = Arc::new(Catalog::builtin().context("Built-in catalog is invalid")?);
    tracing::info!(
        architectures = catalog.architectures().count(),
        use_cases = catalog.use_cases().len(),
        "Catalog loaded"
    );

    tui::run_tui(config, catalog, log_buffer).await
}
