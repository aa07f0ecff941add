// Listings - terminal catalog viewer
//
// Browses a remote product catalog: a list screen with search, category
// filter, sort and pagination, and a detail screen for one product.
//
// Architecture:
// - Catalog: HTTP client and domain types for the `/products` API
// - TUI (ratatui): list and detail screens driven by a synchronous App
// - Fetcher: tokio tasks that run the App's queued requests
// - CLI: headless `list` / `show` commands and config management
// - Demo: an axum server with a sample catalog, usable in-process

mod catalog;
mod cli;
mod config;
mod demo;
mod logging;
mod tui;

use anyhow::{Context, Result};
use catalog::CatalogClient;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogTarget};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never touches the network or the logger
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = &cli.command
    {
        cli::handle_config(*show, *reset, *edit, *path);
        return Ok(());
    }

    Config::ensure_config_exists();
    let mut config = Config::load().context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    // TUI mode captures logs into a buffer so they never garble the screen
    let log_buffer = LogBuffer::new();
    let target = if cli.command.is_none() {
        LogTarget::Tui
    } else {
        LogTarget::Stderr
    };
    let _log_guard = logging::init(&config.logging, target, &log_buffer)?;

    if let Some(Commands::DemoServer { bind }) = &cli.command {
        return demo::serve(*bind).await;
    }

    let demo_server = if config.demo_mode {
        let server = demo::DemoServer::spawn(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .await
            .context("Failed to start demo catalog")?;
        config.api_url = server.base_url();
        Some(server)
    } else {
        None
    };

    tracing::info!(api_url = %config.api_url, "Starting listings");

    let client = CatalogClient::new(
        &config.api_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to create catalog client")?;

    let result = match &cli.command {
        None => tui::run_tui(config, client, log_buffer, cli.product.clone()).await,
        Some(Commands::List(args)) => cli::run_list(&client, args, config.page_limit).await,
        Some(Commands::Show { id, json }) => cli::run_show(&client, id, *json).await,
        Some(Commands::DemoServer { .. }) | Some(Commands::Config { .. }) => Ok(()),
    };

    if let Some(server) = demo_server {
        server.shutdown().await;
    }

    result
}
