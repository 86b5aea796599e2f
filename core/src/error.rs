//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by configuration loading and report output.
///
/// The measured phases themselves never fail; allocation failure aborts the
/// process.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to write report")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
