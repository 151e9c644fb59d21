//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

use crate::frontmatter::{Frontmatter, split_frontmatter};
use crate::header::Header;

/// Error produced while rendering a documentation fragment.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// YAML frontmatter is not a valid header.
    #[error("Invalid frontmatter: {0}")]
    Header(#[from] serde_yaml::Error),
    /// TOML frontmatter is not a valid header.
    #[error("Invalid TOML frontmatter: {0}")]
    TomlHeader(#[from] toml::de::Error),
}

/// Output of rendering a fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    /// Decoded frontmatter, default when the text had none.
    pub header: Header,
    /// Rendered HTML.
    pub markup: String,
}

/// Converts markdown text into a header and markup.
pub trait MarkdownRender {
    /// Render the text.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Header`] or [`RenderError::TomlHeader`] if the
    /// frontmatter cannot be decoded.
    fn render(&self, text: &str) -> Result<Rendered, RenderError>;
}

/// Renderer backed by `pulldown-cmark`.
#[derive(Debug, Clone)]
pub struct CmarkRenderer {
    gfm: bool,
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CmarkRenderer {
    /// Create a new renderer with GFM enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Parser options for the current GFM setting.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    fn render_html(&self, markdown: &str) -> String {
        let mut markup = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut markup, Parser::new_ext(markdown, self.parser_options()));
        markup
    }
}

impl MarkdownRender for CmarkRenderer {
    fn render(&self, text: &str) -> Result<Rendered, RenderError> {
        let (raw_header, body) = split_frontmatter(text);
        let header = match raw_header {
            Some(Frontmatter::Yaml(yaml)) => Header::from_yaml(yaml)?,
            Some(Frontmatter::Toml(text)) => Header::from_toml(text)?,
            None => Header::default(),
        };
        if header.ignore {
            tracing::debug!(title = %header.title, "Fragment marked as ignored");
        }

        Ok(Rendered {
            header,
            markup: self.render_html(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_plain_markdown() {
        let rendered = CmarkRenderer::new().render("# Title\nBody text").unwrap();
        assert_eq!(rendered.header, Header::default());
        assert_eq!(rendered.markup, "<h1>Title</h1>\n<p>Body text</p>\n");
    }

    #[test]
    fn test_render_with_header() {
        let rendered = CmarkRenderer::new()
            .render("---\npath: api/client\ntitle: Client\norder: 1\n---\nUse it.")
            .unwrap();
        assert_eq!(rendered.header.path, "api/client");
        assert_eq!(rendered.header.title, "Client");
        assert_eq!(rendered.header.order, 1);
        assert_eq!(rendered.markup, "<p>Use it.</p>\n");
    }

    #[test]
    fn test_render_with_toml_header() {
        let rendered = CmarkRenderer::new()
            .render("+++\ntitle = \"Setup\"\norder = 2\n+++\nBody")
            .unwrap();
        assert_eq!(rendered.header.title, "Setup");
        assert_eq!(rendered.header.order, 2);
        assert_eq!(rendered.markup, "<p>Body</p>\n");
    }

    #[test]
    fn test_render_invalid_toml_header() {
        let result = CmarkRenderer::new().render("+++\norder = \"first\"\n+++\nbody");
        assert!(matches!(result, Err(RenderError::TomlHeader(_))));
    }

    #[test]
    fn test_render_ignored_header() {
        let rendered = CmarkRenderer::new()
            .render("---\nignore: true\n---\nhidden")
            .unwrap();
        assert!(rendered.header.ignore);
    }

    #[test]
    fn test_render_invalid_header() {
        let result = CmarkRenderer::new().render("---\ntitle: [oops\n---\nbody");
        assert!(matches!(result, Err(RenderError::Header(_))));
    }

    #[test]
    fn test_render_empty_text() {
        let rendered = CmarkRenderer::new().render("").unwrap();
        assert_eq!(rendered.markup, "");
    }

    #[test]
    fn test_render_header_only() {
        let rendered = CmarkRenderer::new().render("---\ntitle: Empty\n---\n").unwrap();
        assert_eq!(rendered.header.title, "Empty");
        assert_eq!(rendered.markup, "");
    }

    #[test]
    fn test_gfm_tables() {
        let rendered = CmarkRenderer::new()
            .render("| A | B |\n|---|---|\n| 1 | 2 |")
            .unwrap();
        assert!(rendered.markup.contains("<table>"));
    }

    #[test]
    fn test_gfm_disabled() {
        let rendered = CmarkRenderer::new()
            .with_gfm(false)
            .render("| A | B |\n|---|---|\n| 1 | 2 |")
            .unwrap();
        assert!(!rendered.markup.contains("<table>"));
    }

    #[test]
    fn test_parser_options_with_gfm() {
        let options = CmarkRenderer::new().parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(options.contains(Options::ENABLE_TASKLISTS));
        assert!(options.contains(Options::ENABLE_GFM));
    }

    #[test]
    fn test_parser_options_without_gfm() {
        let options = CmarkRenderer::new().with_gfm(false).parser_options();
        assert!(options.is_empty());
    }
}
