//! Frontmatter fence detection.

const YAML_FENCE: &str = "---";
const TOML_FENCE: &str = "+++";

/// Raw header text split from the top of a fragment, tagged by its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontmatter<'a> {
    /// Block fenced by `---`.
    Yaml(&'a str),
    /// Block fenced by `+++`.
    Toml(&'a str),
}

impl<'a> Frontmatter<'a> {
    /// Header text without fences.
    pub fn text(self) -> &'a str {
        match self {
            Self::Yaml(text) | Self::Toml(text) => text,
        }
    }
}

/// Split a leading `---` or `+++` fenced block from the text.
///
/// Returns the raw header (without fences) and the remaining body. The
/// opening fence must be the first line and the closing fence must match it.
/// When no closing fence follows, the text has no header and is returned
/// whole as the body.
pub fn split_frontmatter(text: &str) -> (Option<Frontmatter<'_>>, &str) {
    let (first, after_open) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    };
    let fence = match first.trim_end() {
        YAML_FENCE => YAML_FENCE,
        TOML_FENCE => TOML_FENCE,
        _ => return (None, text),
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == fence {
            let header = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            let frontmatter = if fence == TOML_FENCE {
                Frontmatter::Toml(header)
            } else {
                Frontmatter::Yaml(header)
            };
            return (Some(frontmatter), body);
        }
        offset += line.len();
    }

    (None, text)
}
