//! Markdown rendering for documentation fragments.
//!
//! Documentation text may start with a `---`-fenced YAML or `+++`-fenced TOML
//! header that controls where the fragment lands in the site tree. [`CmarkRenderer`] splits that
//! header off, decodes it into a [`Header`], and renders the remaining
//! markdown to HTML with `pulldown-cmark`.
//!
//! # Example
//!
//! ```
//! use auteur_render::{CmarkRenderer, MarkdownRender};
//!
//! let rendered = CmarkRenderer::new()
//!     .render("---\ntitle: Setup\norder: 2\n---\n# Install")
//!     .unwrap();
//! assert_eq!(rendered.header.title, "Setup");
//! assert_eq!(rendered.header.order, 2);
//! assert_eq!(rendered.markup, "<h1>Install</h1>\n");
//! ```

mod frontmatter;
mod header;
mod renderer;

pub use frontmatter::{Frontmatter, split_frontmatter};
pub use header::Header;
pub use renderer::{CmarkRenderer, MarkdownRender, RenderError, Rendered};
