//! Jyotish MCP Server - Entry Point
//!
//! This binary provides an MCP server via STDIO transport for Vedic astrology calculations.

use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jyotish::config::Config;
use jyotish::JyotishServer;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logs go to stderr; stdout carries MCP traffic
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!("Starting Jyotish MCP Server");

    let store = config.open_store()?;
    let server = JyotishServer::new(store, config.capabilities());
    let service = server.serve(stdio()).await?;

    tracing::info!(
        persistence = config.capabilities().persistence,
        "Server initialized, waiting for requests..."
    );

    service.waiting().await?;

    tracing::info!("Server shutting down");

    Ok(())
}
