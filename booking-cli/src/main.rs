use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::ConfigLoader;

#[derive(Parser)]
#[command(name = "booking", about = "Hardware booking: server, wizard and catalog")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the booking server
    Serve(commands::serve::ServeArgs),
    /// Book hardware in the terminal wizard
    Wizard(commands::wizard::WizardArgs),
    /// List bookable hardware
    Catalog(commands::catalog::CatalogArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The wizard owns the screen; keep log lines out of it unless asked.
    let default_filter = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Wizard(_), false) => "warn",
        _ => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve(args) => commands::serve::run(args, ConfigLoader::load()?).await,
        Commands::Wizard(args) => commands::wizard::run(args, ConfigLoader::load()?).await,
        Commands::Catalog(args) => commands::catalog::run(args, ConfigLoader::load()?),
        Commands::Config(args) => commands::config::run(args),
    }
}
