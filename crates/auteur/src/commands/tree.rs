//! `auteur tree` command implementation.

use std::io::{self, Write};

use crate::commands::IngestArgs;
use crate::error::CliError;
use crate::output::Output;

/// Ingest the documentation root and print the page outline to stdout.
///
/// # Errors
///
/// Returns an error if the site cannot be built or stdout cannot be written.
pub(crate) fn execute(args: &IngestArgs) -> Result<(), CliError> {
    let output = Output::new();
    let site = args.build_site(&output)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", site.outline())?;
    stdout.flush()?;
    Ok(())
}
