//! `auteur json` command implementation.

use std::io::{self, Write};

use crate::commands::IngestArgs;
use crate::error::CliError;
use crate::output::Output;

/// Ingest the documentation root and print the site as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error if the site cannot be built, serialized, or written.
pub(crate) fn execute(args: &IngestArgs) -> Result<(), CliError> {
    let output = Output::new();
    let site = args.build_site(&output)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &site.snapshot())?;
    writeln!(stdout)?;
    Ok(())
}
