//! Auteur CLI - documentation extraction engine.
//!
//! Provides commands for:
//! - `tree`: Print the assembled page tree
//! - `json`: Print the assembled page tree as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::IngestArgs;
use output::Output;

/// Auteur - documentation extracted from source comments.
#[derive(Parser)]
#[command(name = "auteur", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page tree with titles and hrefs.
    Tree(IngestArgs),
    /// Print the page tree and its contents as JSON.
    Json(IngestArgs),
}

impl Commands {
    fn args(&self) -> &IngestArgs {
        match self {
            Self::Tree(args) | Self::Json(args) => args,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.args().verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => commands::tree::execute(&args),
        Commands::Json(args) => commands::json::execute(&args),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_tree_command() {
        let cli = Cli::try_parse_from([
            "auteur", "tree", "--root", "src", "-e", "target", "-e", "*.min.js", "--verbose",
        ])
        .unwrap();

        let Commands::Tree(args) = cli.command else {
            panic!("expected tree command");
        };
        assert_eq!(args.root, Some(PathBuf::from("src")));
        assert_eq!(args.exclude, vec!["target", "*.min.js"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_json_command_with_config() {
        let cli = Cli::try_parse_from([
            "auteur",
            "json",
            "--config",
            "docs/auteur.toml",
            "--title",
            "Docs",
        ])
        .unwrap();

        let Commands::Json(args) = cli.command else {
            panic!("expected json command");
        };
        assert_eq!(args.config, Some(PathBuf::from("docs/auteur.toml")));
        assert_eq!(args.title.as_deref(), Some("Docs"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_site_overrides() {
        let cli = Cli::try_parse_from([
            "auteur",
            "tree",
            "--desc",
            "Team handbook",
            "--site-version",
            "2.5",
        ])
        .unwrap();

        let args = cli.command.args();
        assert_eq!(args.desc.as_deref(), Some("Team handbook"));
        assert_eq!(args.site_version.as_deref(), Some("2.5"));
    }

    #[test]
    fn test_override_environment_variables() {
        let command = Cli::command();
        let tree = command.find_subcommand("tree").unwrap();
        let env_of = |id: &str| {
            tree.get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("root").as_deref(), Some("AUTEUR_ROOTDIR"));
        assert_eq!(env_of("title").as_deref(), Some("AUTEUR_TITLE"));
        assert_eq!(env_of("desc").as_deref(), Some("AUTEUR_DESC"));
        assert_eq!(env_of("site_version").as_deref(), Some("AUTEUR_VERSION"));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["auteur"]).is_err());
    }
}
