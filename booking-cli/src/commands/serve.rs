//! Runs the booking server: the hardware page and the notes API

use std::path::PathBuf;

use anyhow::Result;
use booking_server::{BookingServer, ServerConfig};
use clap::Args;
use tracing::info;

use crate::config::BookingConfig;

/// Arguments for the serve command
#[derive(Debug, Args, Default)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// SQLite file for submitted notes
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Hardware catalog replacing the bundled one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Flags override the loaded configuration
pub fn server_config(args: &ServeArgs, config: &BookingConfig) -> ServerConfig {
    ServerConfig {
        host: args
            .host
            .clone()
            .unwrap_or_else(|| config.server.host.clone()),
        port: args.port.unwrap_or(config.server.port),
        database: Some(
            args.database
                .clone()
                .unwrap_or_else(|| config.storage.database.clone()),
        ),
        catalog: args.catalog.clone().or_else(|| config.catalog.path.clone()),
    }
}

pub async fn run(args: ServeArgs, config: BookingConfig) -> Result<()> {
    let server_config = server_config(&args, &config);
    info!("Starting booking server on {}", server_config.addr());

    let server = BookingServer::new(server_config)?;
    server.run().await?;
    Ok(())
}
