//! Content units built from marked comments.

use auteur_comments::Directive;
use auteur_render::{MarkdownRender, RenderError};
use auteur_site::Content;

/// Placement used when neither the directive nor the header gives one.
#[derive(Debug, Clone, Copy)]
pub struct Fallback<'a> {
    /// Target path segments.
    pub path: &'a [String],
    /// Title, possibly empty.
    pub title: &'a str,
}

/// Render a directive body and resolve its placement.
///
/// The target path comes from the first directive argument, then the header
/// `path`, then the fallback. The title comes from the header, then the
/// fallback. Returns `None` when the header sets `ignore`.
///
/// # Errors
///
/// Returns the renderer's error when the body cannot be rendered.
pub fn build_content(
    renderer: &dyn MarkdownRender,
    directive: &Directive,
    fallback: Fallback<'_>,
) -> Result<Option<Content>, RenderError> {
    let rendered = renderer.render(&directive.body)?;
    let header = rendered.header;
    if header.ignore {
        return Ok(None);
    }

    let target_path = if let Some(argument) = directive.arguments.first() {
        split_path(argument)
    } else if !header.path.is_empty() {
        split_path(&header.path)
    } else {
        fallback.path.to_vec()
    };

    let title = if header.title.is_empty() {
        fallback.title.to_owned()
    } else {
        header.title
    };

    Ok(Some(Content {
        markup: rendered.markup,
        target_path,
        title,
        order: header.order,
    }))
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use auteur_render::CmarkRenderer;
    use pretty_assertions::assert_eq;

    use super::*;

    fn directive(arguments: &[&str], body: &str) -> Directive {
        Directive {
            present: true,
            arguments: arguments.iter().map(|&a| a.to_owned()).collect(),
            body: body.to_owned(),
        }
    }

    fn fallback_path() -> Vec<String> {
        vec!["pkg".to_owned(), "api".to_owned()]
    }

    #[test]
    fn test_fallback_placement() {
        let path = fallback_path();
        let content = build_content(
            &CmarkRenderer::new(),
            &directive(&[], "# Title\nBody text"),
            Fallback {
                path: &path,
                title: "",
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(content.markup, "<h1>Title</h1>\n<p>Body text</p>\n");
        assert_eq!(content.target_path, vec!["pkg", "api"]);
        assert_eq!(content.title, "");
        assert_eq!(content.order, 0);
    }

    #[test]
    fn test_argument_path_wins_over_header() {
        let path = fallback_path();
        let content = build_content(
            &CmarkRenderer::new(),
            &directive(&["guides/setup"], "---\npath: other\n---\nText"),
            Fallback {
                path: &path,
                title: "",
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(content.target_path, vec!["guides", "setup"]);
    }

    #[test]
    fn test_header_path_and_title() {
        let path = fallback_path();
        let content = build_content(
            &CmarkRenderer::new(),
            &directive(&[], "---\npath: reference\ntitle: Reference\norder: 7\n---\nText"),
            Fallback {
                path: &path,
                title: "fallback",
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(content.target_path, vec!["reference"]);
        assert_eq!(content.title, "Reference");
        assert_eq!(content.order, 7);
    }

    #[test]
    fn test_fallback_title_used_without_header_title() {
        let content = build_content(
            &CmarkRenderer::new(),
            &directive(&[], "Text"),
            Fallback {
                path: &[],
                title: "getting started",
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(content.title, "getting started");
        assert!(content.target_path.is_empty());
    }

    #[test]
    fn test_ignored_header() {
        let result = build_content(
            &CmarkRenderer::new(),
            &directive(&["x"], "---\nignore: true\n---\nText"),
            Fallback {
                path: &[],
                title: "",
            },
        )
        .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_render_error_propagates() {
        let result = build_content(
            &CmarkRenderer::new(),
            &directive(&[], "---\norder: [\n---\nText"),
            Fallback {
                path: &[],
                title: "",
            },
        );

        assert!(matches!(result, Err(RenderError::Header(_))));
    }
}
