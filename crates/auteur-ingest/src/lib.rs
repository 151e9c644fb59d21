//! Source tree ingestion for Auteur.
//!
//! The [`Ingestor`] walks a documentation root, hands every supported file to
//! a [`Processor`], and inserts the resulting content into a
//! [`Site`](auteur_site::Site):
//!
//! - source files with a registered comment style contribute their
//!   `@auteur`-marked comments
//! - markdown files contribute themselves, placed by file name
//!
//! # Example
//!
//! ```no_run
//! use auteur_ingest::Ingestor;
//! use auteur_site::Site;
//!
//! let mut site = Site::new("Handbook");
//! let report = Ingestor::new("./src")
//!     .with_exclude(&["target", "*_test.go"])?
//!     .ingest(&mut site)?;
//! if report.is_empty() {
//!     eprintln!("no documentation found");
//! }
//! # Ok::<(), auteur_ingest::IngestError>(())
//! ```

mod content;
mod error;
mod ingest;
mod processor;
mod scanner;

pub use content::{Fallback, build_content};
pub use error::IngestError;
pub use ingest::{IngestReport, Ingestor};
pub use processor::Processor;
pub use scanner::{Exclusions, SourceFile};
