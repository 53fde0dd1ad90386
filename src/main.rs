use std::path::{Path, PathBuf};
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textkit::config::Settings;
use textkit::nlp::NlpEngine;
use textkit::server::{ApiServer, AppState};

/// Command line overrides for the loaded settings
#[derive(Parser, Debug)]
#[command(name = "textkit", version, about = "Text tokenization and analysis server")]
struct Cli {
    /// Directory holding default.toml and local.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Host address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port number to listen on
    #[arg(long)]
    port: Option<u16>,
}

/// Main entry point for the textkit server
///
/// Loads settings, initializes logging, loads the optional language model
/// and serves the HTTP API until the process is stopped.
///
/// # Errors
/// Returns an error if configuration is invalid or the listener cannot bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load settings first
    let mut settings = Settings::from_dir(&cli.config_dir)
        .with_context(|| format!("loading configuration from {}", cli.config_dir.display()))?;
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    settings.validate()?;

    let log_path = settings.logging.file.as_deref().unwrap_or_else(|| Path::new("logs"));
    std::fs::create_dir_all(log_path)?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::new(
        tracing_appender::rolling::Rotation::DAILY,
        log_path,
        "textkit",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        // Disable ANSI colors for cleaner log files
        .with_ansi(false)
        .with_line_number(true)
        .with_file(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(false)
        .with_env_filter(filter)
        .init();

    info!("textkit starting up...");
    let full_log_path = std::fs::canonicalize(log_path)?;
    info!("Log directory: {}", full_log_path.display());
    info!("Settings loaded");

    // Resolved once; handlers only ever read it
    let engine = NlpEngine::from_config(&settings.nlp);
    let state = AppState::from_settings(&settings, engine);

    let server = ApiServer::new(
        state,
        settings.server.host.clone(),
        settings.server.port,
        settings.server.body_limit_bytes,
    );

    println!(
        "textkit listening on http://{}:{}",
        settings.server.host, settings.server.port
    );
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
