//! File processors.
//!
//! A processor turns the text of one source file into content units.

use auteur_comments::{CommentStyles, Directive, directives};
use auteur_render::{MarkdownRender, RenderError};
use auteur_site::Content;

use crate::content::{Fallback, build_content};
use crate::scanner::SourceFile;

/// Markdown file extensions.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// How a source file is turned into content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processor {
    /// Marked comments inside source code.
    Comments,
    /// A markdown file that is documentation as a whole.
    Markdown,
}

impl Processor {
    /// Pick the processor for a file extension.
    ///
    /// Returns `None` for extensions nothing handles.
    pub fn for_extension(extension: &str, styles: &CommentStyles) -> Option<Self> {
        let extension = extension.trim_start_matches('.');
        if MARKDOWN_EXTENSIONS
            .iter()
            .any(|md| md.eq_ignore_ascii_case(extension))
        {
            Some(Self::Markdown)
        } else if styles.supports(extension) {
            Some(Self::Comments)
        } else {
            None
        }
    }

    /// Build the content units of a file.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error for the first fragment that fails.
    pub fn load(
        self,
        file: &SourceFile,
        text: &str,
        styles: &CommentStyles,
        renderer: &dyn MarkdownRender,
    ) -> Result<Vec<Content>, RenderError> {
        match self {
            Self::Comments => load_comments(file, text, styles, renderer),
            Self::Markdown => load_markdown(file, text, renderer),
        }
    }
}

fn load_comments(
    file: &SourceFile,
    text: &str,
    styles: &CommentStyles,
    renderer: &dyn MarkdownRender,
) -> Result<Vec<Content>, RenderError> {
    let syntax = styles.for_extension(file.extension().unwrap_or_default());
    let fallback = Fallback {
        path: &file.dir_segments,
        title: "",
    };

    let mut contents = Vec::new();
    for directive in directives(text, syntax) {
        if let Some(content) = build_content(renderer, &directive, fallback)? {
            contents.push(content);
        }
    }
    Ok(contents)
}

fn load_markdown(
    file: &SourceFile,
    text: &str,
    renderer: &dyn MarkdownRender,
) -> Result<Vec<Content>, RenderError> {
    let stem = file.stem();
    let title = stem.replace(['_', '-'], " ");

    let mut path = file.dir_segments.clone();
    if !(stem.eq_ignore_ascii_case("readme") || stem.eq_ignore_ascii_case("index")) {
        path.push(stem.to_lowercase().replace(['_', '-'], " "));
    }

    let whole_file = Directive {
        present: true,
        arguments: Vec::new(),
        body: text.to_owned(),
    };
    let fallback = Fallback {
        path: &path,
        title: &title,
    };

    Ok(build_content(renderer, &whole_file, fallback)?
        .into_iter()
        .collect())
}
