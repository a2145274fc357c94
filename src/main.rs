//! Application entry point for the `platform-api` service.
//!
//! This binary orchestrates the startup sequence for the Platform Engineering
//! API:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests until Ctrl+C/SIGTERM
//!
//! # Environment Variables
//! - `FLASK_HOST` (optional) – bind address (default: `0.0.0.0`)
//! - `FLASK_PORT` (optional) – bind port (default: `5000`)
//! - `FLASK_ENV` (optional) – environment name (default: `production`);
//!   `development` turns on verbose diagnostics
//! - `HOSTNAME` (optional) – hostname reported by `/api/v1/details`
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! This module follows the Explicit Module Boundary Pattern (EMBP) by
//! delegating configuration parsing to `config`, payloads to `models`,
//! error rendering to `error`, and route registration to `routes`.
use std::{env, io::IsTerminal};

use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use anyhow::{Context, Result};

mod config;
mod error;
mod models;
mod routes;

pub use config::Config;

use models::{APP_NAME, APP_VERSION};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenv().ok();

    let cfg = config::load_from_env()?;
    init_tracing(cfg.is_development());

    print_banner(&cfg);
    cfg.log_config();

    let addr = (cfg.host.clone(), cfg.port);

    // Build app from routes gateway (EMBP)
    let app: Router = routes::router(cfg);

    let listener = tokio::net::TcpListener::bind((addr.0.as_str(), addr.1))
        .await
        .with_context(|| format!("Failed to bind {}:{}", addr.0, addr.1))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

// ---

/// Startup summary on standard output, printed before the listener accepts
/// connections.
fn print_banner(cfg: &Config) {
    println!("Starting {APP_NAME} v{APP_VERSION}");
    println!("Environment: {}", cfg.environment);
    println!("Debug mode: {}", cfg.is_development());
    println!("Server running on http://{}:{}", cfg.host, cfg.port);
}

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `AXUM_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by `RUST_LOG`, then `AXUM_LOG_LEVEL`, then the
///   environment: `debug` in development, `info` otherwise
///
/// This should be called once at application startup before any logging
/// or tracing macros are invoked. It installs the subscriber globally
/// for the lifetime of the process.
fn init_tracing(development: bool) {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to AXUM_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("AXUM_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ if development => "debug",
            _ => "info",
        };
        EnvFilter::new(format!("{level},tower_http=debug"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}

/// Resolve once Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    // ---
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
