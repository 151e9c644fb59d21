//! CLI command implementations.

pub(crate) mod json;
pub(crate) mod tree;

use std::path::PathBuf;

use auteur_config::{CliSettings, Config};
use auteur_ingest::Ingestor;
use auteur_site::Site;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments shared by commands that ingest a documentation root.
#[derive(Args)]
pub(crate) struct IngestArgs {
    /// Path to configuration file (default: auto-discover auteur.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Documentation root directory (overrides config).
    #[arg(short, long, env = "AUTEUR_ROOTDIR")]
    pub root: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(short, long, env = "AUTEUR_TITLE")]
    pub title: Option<String>,

    /// Site description (overrides config).
    #[arg(long, env = "AUTEUR_DESC")]
    pub desc: Option<String>,

    /// Documented project version (overrides config).
    #[arg(long = "site-version", value_name = "VERSION", env = "AUTEUR_VERSION")]
    pub site_version: Option<String>,

    /// Additional file or directory name to skip (glob allowed, repeatable).
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Enable verbose output (log excluded entries and ingestion summary).
    #[arg(short, long)]
    pub verbose: bool,
}

impl IngestArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            root: self.root.clone(),
            title: self.title.clone(),
            desc: self.desc.clone(),
            version: self.site_version.clone(),
            exclude: self.exclude.clone(),
        }
    }

    /// Load configuration and ingest the documentation root into a site.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or ingestion fails, or if no
    /// documentation was found.
    pub(crate) fn build_site(&self, output: &Output) -> Result<Site, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let root = &config.docs_resolved.root;
        output.detail(&format!("Reading sources from {}", root.display()));

        let mut site = Site::new(config.site.title.as_str())
            .with_description(config.site.desc.as_str())
            .with_version(config.site.version.as_str());
        let report = Ingestor::new(root)
            .with_exclude(&config.docs_resolved.exclude)?
            .ingest(&mut site)?;

        if report.is_empty() {
            return Err(CliError::NoContent(root.clone()));
        }

        output.success(&format!(
            "Found {} documentation fragments in {} files",
            report.contents_inserted, report.files_processed
        ));
        Ok(site)
    }
}
