//! Catalog error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading the hardware catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate hardware id: {0}")]
    DuplicateId(String),
}
