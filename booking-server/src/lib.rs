//! booking-server - HTTP server for the hardware booking tools
//!
//! Serves the hardware listing page and the notes API. The server owns the
//! notes store and the catalog; the terminal wizard talks to it over HTTP.

mod error;
pub mod http;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use booking_core::{Catalog, SqliteNoteStore};
use tokio::net::TcpListener;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;

/// Default port for the booking server
pub const DEFAULT_PORT: u16 = 7480;
/// Default host for the booking server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Notes database; defaults to the XDG data directory
    pub database: Option<PathBuf>,
    /// Hardware catalog file; defaults to the bundled list
    pub catalog: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: None,
            catalog: None,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Database path with the default applied
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(booking_paths::default_database_path)
    }
}

/// The booking HTTP server
pub struct BookingServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl BookingServer {
    /// Open the notes database and load the catalog named in `config`
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let database = config.database_path();
        if let Some(parent) = database.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServerError::Internal(format!(
                    "failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let notes = Arc::new(SqliteNoteStore::open(&database)?);
        tracing::info!(path = %database.display(), "opened notes database");

        let catalog = match &config.catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };

        let state = Arc::new(AppState::new(notes, catalog));
        Ok(Self { config, state })
    }

    /// Create a server with custom state (for testing)
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        self.run_with_listener(listener).await
    }

    /// Run the server on an already-bound listener
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        if let Ok(local) = listener.local_addr() {
            tracing::info!("booking server listening on {}", local);
        }

        let router = create_router(self.state);
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}
