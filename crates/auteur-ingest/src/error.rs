//! Ingestion errors.

use std::path::PathBuf;

use auteur_render::RenderError;

/// Error raised while ingesting a documentation root.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A documentation fragment could not be rendered.
    #[error("Failed to render documentation in {}: {source}", path.display())]
    Render { path: PathBuf, source: RenderError },
    /// A directory could not be listed.
    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An exclusion pattern is not a valid glob.
    #[error("Invalid exclusion pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}
