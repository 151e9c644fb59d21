//! Ingestion driver.

use std::fs;
use std::path::{Path, PathBuf};

use auteur_comments::CommentStyles;
use auteur_render::{CmarkRenderer, MarkdownRender};
use auteur_site::Site;

use crate::error::IngestError;
use crate::processor::Processor;
use crate::scanner::{Exclusions, Scanner};

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Files found under the root.
    pub files_scanned: usize,
    /// Files handled by a processor.
    pub files_processed: usize,
    /// Content units inserted into the site.
    pub contents_inserted: usize,
}

impl IngestReport {
    /// Whether no documentation was found.
    pub fn is_empty(&self) -> bool {
        self.contents_inserted == 0
    }
}

/// Walks a documentation root and fills a [`Site`].
pub struct Ingestor<'s, R = CmarkRenderer> {
    root: PathBuf,
    exclusions: Exclusions,
    styles: &'s CommentStyles,
    renderer: R,
}

impl Ingestor<'static> {
    /// Create an ingestor with the built-in comment styles, the default
    /// renderer and no exclusions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclusions: Exclusions::default(),
            styles: CommentStyles::builtin(),
            renderer: CmarkRenderer::new(),
        }
    }
}

impl<'s, R: MarkdownRender> Ingestor<'s, R> {
    /// Skip files and directories matching these names or globs.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Pattern`] for an invalid glob.
    pub fn with_exclude<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self, IngestError> {
        self.exclusions = Exclusions::new(patterns)?;
        Ok(self)
    }

    /// Use a different comment style registry.
    #[must_use]
    pub fn with_styles<'t>(self, styles: &'t CommentStyles) -> Ingestor<'t, R> {
        Ingestor {
            root: self.root,
            exclusions: self.exclusions,
            styles,
            renderer: self.renderer,
        }
    }

    /// Use a different renderer.
    #[must_use]
    pub fn with_renderer<T: MarkdownRender>(self, renderer: T) -> Ingestor<'s, T> {
        Ingestor {
            root: self.root,
            exclusions: self.exclusions,
            styles: self.styles,
            renderer,
        }
    }

    /// Documentation root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ingest every file under the root into `site`, below its root page.
    ///
    /// # Errors
    ///
    /// Fails on the first directory that cannot be listed, file that cannot
    /// be read, or fragment that cannot be rendered.
    pub fn ingest(&self, site: &mut Site) -> Result<IngestReport, IngestError> {
        let files = Scanner::new(&self.root, &self.exclusions).scan()?;
        let mut report = IngestReport {
            files_scanned: files.len(),
            ..IngestReport::default()
        };
        let root = site.root();

        for file in &files {
            let Some(processor) = file
                .extension()
                .and_then(|ext| Processor::for_extension(ext, self.styles))
            else {
                continue;
            };

            tracing::debug!(path = %file.path.display(), ?processor, "Reading file");
            let bytes = fs::read(&file.path).map_err(|source| IngestError::Read {
                path: file.path.clone(),
                source,
            })?;
            let text = String::from_utf8_lossy(&bytes);

            let contents = processor
                .load(file, &text, self.styles, &self.renderer)
                .map_err(|source| IngestError::Render {
                    path: file.path.clone(),
                    source,
                })?;
            report.files_processed += 1;

            for content in contents {
                if site.insert_content(root, content).is_some() {
                    report.contents_inserted += 1;
                } else {
                    tracing::debug!(path = %file.path.display(), "Skipping empty fragment");
                }
            }
        }

        tracing::info!(
            root = %self.root.display(),
            files = report.files_scanned,
            processed = report.files_processed,
            contents = report.contents_inserted,
            "Ingestion finished"
        );
        Ok(report)
    }
}
