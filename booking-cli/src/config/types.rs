use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use booking_server::{DEFAULT_HOST, DEFAULT_PORT};

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawBookingConfig {
    #[serde(default)]
    pub server: RawServerSection,

    #[serde(default)]
    pub storage: RawStorageSection,

    #[serde(default)]
    pub catalog: CatalogSection,

    #[serde(default)]
    pub wizard: WizardSection,
}

/// Server section as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawStorageSection {
    pub database: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    pub server: ServerSection,
    pub storage: StorageSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub wizard: WizardSection,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            storage: StorageSection {
                database: booking_paths::default_database_path(),
            },
            catalog: CatalogSection::default(),
            wizard: WizardSection::default(),
        }
    }
}

impl BookingConfig {
    /// URL the wizard posts notes to
    pub fn server_url(&self) -> String {
        self.wizard
            .server_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.server.host, self.server.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    /// SQLite file holding submitted notes
    pub database: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogSection {
    /// Hardware list replacing the bundled one
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardSection {
    /// Flow file replacing the bundled booking flow
    pub flow: Option<PathBuf>,

    /// Server the wizard submits to; defaults to the `[server]` address
    pub server_url: Option<String>,
}
