//! Error types raised by host service implementations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by host services.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("mod '{0}' is not registered with the mod loader")]
    UnknownMod(String),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, HostError>;
