//! Source file discovery by filesystem walking.
//!
//! The scanner only finds files. Reading and processing them is left to the
//! [`Ingestor`](crate::Ingestor).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IngestError;

/// A file found under the documentation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute or root-joined path to the file.
    pub path: PathBuf,
    /// Directory names from the root to the file's parent.
    pub dir_segments: Vec<String>,
    /// File name including extension.
    pub file_name: String,
}

impl SourceFile {
    /// Extension without the dot, if any.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
    }

    /// File name up to the first dot.
    pub fn stem(&self) -> &str {
        self.file_name
            .split('.')
            .next()
            .unwrap_or(&self.file_name)
    }
}

/// File and directory names skipped while scanning.
///
/// A name is excluded when it equals a pattern or matches it as a glob.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    patterns: Vec<(String, glob::Pattern)>,
}

impl Exclusions {
    /// Compile exclusion patterns.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Pattern`] for a pattern that is not a valid glob.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, IngestError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let raw = p.as_ref();
                glob::Pattern::new(raw)
                    .map(|compiled| (raw.to_owned(), compiled))
                    .map_err(|source| IngestError::Pattern {
                        pattern: raw.to_owned(),
                        source,
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether a file or directory name is excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|(raw, pattern)| raw == name || pattern.matches(name))
    }
}

/// Walks the documentation root and lists candidate files.
pub(crate) struct Scanner<'a> {
    root: &'a Path,
    exclusions: &'a Exclusions,
}

impl<'a> Scanner<'a> {
    pub fn new(root: &'a Path, exclusions: &'a Exclusions) -> Self {
        Self { root, exclusions }
    }

    /// Scan the root and return every non-excluded regular file.
    ///
    /// Entries of each directory are visited in file name order. Excluded
    /// directories are not descended.
    pub fn scan(&self) -> Result<Vec<SourceFile>, IngestError> {
        let mut files = Vec::new();
        self.scan_directory(self.root, &[], &mut files)?;
        Ok(files)
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        segments: &[String],
        files: &mut Vec<SourceFile>,
    ) -> Result<(), IngestError> {
        let walk_error = |source| IngestError::Walk {
            path: dir_path.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(dir_path)
            .map_err(walk_error)?
            .map(|entry| {
                let entry = entry?;
                let is_dir = entry.file_type()?.is_dir();
                Ok((entry, is_dir))
            })
            .collect::<Result<Vec<_>, std::io::Error>>()
            .map_err(walk_error)?;
        entries.sort_by_key(|(entry, _)| entry.file_name());

        for (entry, is_dir) in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            if self.exclusions.is_excluded(&name) {
                tracing::info!(path = %path.display(), "Excluding");
                continue;
            }

            if is_dir {
                let mut child_segments = segments.to_vec();
                child_segments.push(name);
                self.scan_directory(&path, &child_segments, files)?;
            } else {
                files.push(SourceFile {
                    path,
                    dir_segments: segments.to_vec(),
                    file_name: name,
                });
            }
        }

        Ok(())
    }
}
