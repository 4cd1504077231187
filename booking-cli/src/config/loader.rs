use super::types::{
    BookingConfig, CatalogSection, RawBookingConfig, RawServerSection, RawStorageSection,
    ServerSection, StorageSection, WizardSection,
};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<BookingConfig> {
        Self::load_layers(&[Self::user_config_path(), Self::project_config_path()])
    }

    /// Merge the given files in order; later files win, missing files are skipped
    pub fn load_layers(paths: &[PathBuf]) -> Result<BookingConfig> {
        let mut raw = RawBookingConfig::default();
        for path in paths {
            if let Some(layer) = Self::read_layer(path)? {
                raw = Self::merge_raw(raw, layer);
            }
        }
        Ok(Self::finalize(raw))
    }

    fn read_layer(path: &Path) -> Result<Option<RawBookingConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config layer");
        Ok(Some(raw))
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> PathBuf {
        ProjectDirs::from("", "", "booking")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(booking_paths::config_dir)
            .join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with BOOKING_PROJECT_CONFIG_DIR
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("BOOKING_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".booking/config.toml")
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawBookingConfig, overlay: RawBookingConfig) -> RawBookingConfig {
        RawBookingConfig {
            server: RawServerSection {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            storage: RawStorageSection {
                database: overlay.storage.database.or(base.storage.database),
            },
            catalog: CatalogSection {
                path: overlay.catalog.path.or(base.catalog.path),
            },
            wizard: WizardSection {
                flow: overlay.wizard.flow.or(base.wizard.flow),
                server_url: overlay.wizard.server_url.or(base.wizard.server_url),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawBookingConfig) -> BookingConfig {
        let defaults = ServerSection::default();
        BookingConfig {
            server: ServerSection {
                host: raw.server.host.unwrap_or(defaults.host),
                port: raw.server.port.unwrap_or(defaults.port),
            },
            storage: StorageSection {
                database: raw
                    .storage
                    .database
                    .unwrap_or_else(booking_paths::default_database_path),
            },
            catalog: raw.catalog,
            wizard: raw.wizard,
        }
    }
}
