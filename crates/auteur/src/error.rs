//! CLI error types.

use std::path::PathBuf;

use auteur_config::ConfigError;
use auteur_ingest::IngestError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Ingest(#[from] IngestError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("No Auteur-compatible content found in folder {}", .0.display())]
    NoContent(PathBuf),
}
