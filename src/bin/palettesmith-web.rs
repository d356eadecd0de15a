//! Palettesmith Web Server Binary
//!
//! This binary starts the Palettesmith web server that provides a REST API
//! over the color engine for a browser frontend.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured address (127.0.0.1:3001 by default)
//! palettesmith-web
//!
//! # Override port and host
//! palettesmith-web --port 8080 --host 0.0.0.0
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettesmith::config::Config;
use palettesmith::web;

/// Palettesmith Web Server - REST API for the palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {e:#}");
        Config::default()
    });
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    let addr: SocketAddr = config
        .server
        .bind_addr()
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind_addr()))?;

    web::run_server(config, addr).await
}
