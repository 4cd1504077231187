//! Launches the terminal booking wizard

use std::path::PathBuf;

use anyhow::{Context, Result};
use booking_core::FlowDefinition;
use booking_tui::{App, NotesClient, bundled_flow, install_panic_hook};
use clap::Args;
use tracing::info;

use super::catalog::load_catalog;
use crate::config::BookingConfig;

#[derive(Debug, Args, Default)]
#[command(after_long_help = "\
Examples:
  booking wizard                              Book against the configured server
  booking wizard --server http://host:7480    Submit to another server
  booking wizard --flow my-flow.toml          Use a custom step order
")]
pub struct WizardArgs {
    /// Server the booking note is sent to
    #[arg(long)]
    pub server: Option<String>,

    /// Flow file (TOML) replacing the bundled flow
    #[arg(long)]
    pub flow: Option<PathBuf>,
}

/// Flow from `--flow`, the config, or the bundled default
pub fn load_flow(args: &WizardArgs, config: &BookingConfig) -> Result<FlowDefinition> {
    match args.flow.as_ref().or(config.wizard.flow.as_ref()) {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read flow {}", path.display()))?;
            FlowDefinition::from_toml(&contents)
                .with_context(|| format!("Invalid flow {}", path.display()))
        }
        None => Ok(bundled_flow()?),
    }
}

pub async fn run(args: WizardArgs, config: BookingConfig) -> Result<()> {
    let flow = load_flow(&args, &config)?;
    let catalog = load_catalog(config.catalog.path.as_deref())?;
    let url = args.server.clone().unwrap_or_else(|| config.server_url());

    let mut app = App::new(&flow, catalog)?.with_client(NotesClient::new(url.clone()));
    info!(server = %url, "starting booking wizard");

    install_panic_hook();
    app.run().await?;

    if let Some(note) = &app.submitted {
        println!("Buchung als Notiz #{} gespeichert.", note.id);
    }
    Ok(())
}
