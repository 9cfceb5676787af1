//! segment-router demo service.
//!
//! ```text
//!   HTTP request ──▶ axum (TraceLayer, TimeoutLayer)
//!                      │
//!                      ▼
//!                 Dispatcher::handle(method, path)
//!                      │
//!          ┌───────────┴────────────┐
//!          ▼                        ▼
//!   first matching route       no match
//!   handler(&RequestContext)   404 "No route matches <path>"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use segment_router::app::demo_router;
use segment_router::config::{load_config, validate_config, AppConfig, ConfigError};
use segment_router::http::HttpServer;
use segment_router::observability::init_logging;

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Serve the demo route table over HTTP", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!("segment-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let dispatcher = demo_router()?
        .into_dispatcher()
        .configure(&config.dispatch);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config, Arc::new(dispatcher));
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
