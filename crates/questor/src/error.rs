//! Errors raised while installing the trader.

use std::path::PathBuf;

use host::HostError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InstallError>;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("trader definition is not valid")]
    Definition(#[source] serde_json::Error),

    #[error("failed to read config {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
