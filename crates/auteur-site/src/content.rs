//! Rendered documentation fragments.

/// A rendered fragment ready to be placed in the site tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    /// Rendered markup.
    pub markup: String,
    /// Path segments below the insertion page. Items may contain `/`.
    pub target_path: Vec<String>,
    /// Fragment title, possibly empty.
    pub title: String,
    /// Sort key among the contents of a page.
    pub order: i64,
}

impl Content {
    /// Create content from rendered markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            ..Self::default()
        }
    }

    /// Set the target path from a slash-separated string.
    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.target_path = path.split('/').map(str::to_owned).collect();
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the order.
    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Length of the rendered markup in bytes.
    pub fn len(&self) -> usize {
        self.markup.len()
    }

    /// Whether the rendered markup is empty.
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }

    /// Usable path segments: items split on `/`, blank segments dropped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.target_path
            .iter()
            .flat_map(|item| item.split('/'))
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_segments_split_and_skip_blank() {
        let content = Content {
            target_path: vec![String::new(), "Docs/ API ".to_owned(), " ".to_owned()],
            ..Content::default()
        };
        assert_eq!(content.segments().collect::<Vec<_>>(), vec!["Docs", "API"]);
    }

    #[test]
    fn test_with_path() {
        let content = Content::new("<p>x</p>").with_path("guides/setup");
        assert_eq!(content.target_path, vec!["guides", "setup"]);
        assert_eq!(content.len(), 8);
        assert!(!content.is_empty());
    }

    #[test]
    fn test_empty_content() {
        assert!(Content::new("").is_empty());
        assert_eq!(Content::new("").segments().count(), 0);
    }
}
