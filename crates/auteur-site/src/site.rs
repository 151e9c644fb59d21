//! Site tree.
//!
//! # Architecture
//!
//! Pages live in a flat `Vec<Page>` indexed by [`PageId`]. Parent and root
//! links are ids, so the tree has a single owner and no reference cycles.
//! Page `0` is always the root.

use std::fmt::Write;

use crate::content::Content;
use crate::page::{Page, PageId};
use crate::slug::{same_slug, slugify};

/// Ordered tree of documentation pages.
#[derive(Debug, Clone)]
pub struct Site {
    pages: Vec<Page>,
    description: String,
    version: String,
}

impl Site {
    /// Create a site with a single root page.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            pages: vec![Page::new(title.into(), 0, None, None)],
            description: String::new(),
            version: String::new(),
        }
    }

    /// Set the site description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the documented version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Site title, which is the root page title.
    pub fn title(&self) -> &str {
        &self.pages[0].title
    }

    /// Site description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Documented version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Root page id.
    pub fn root(&self) -> PageId {
        PageId(0)
    }

    /// Number of pages including the root.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this site.
    pub fn page(&self, id: PageId) -> &Page {
        &self.pages[id.0]
    }

    /// Child pages in order.
    pub fn children(&self, id: PageId) -> &[PageId] {
        &self.page(id).children
    }

    /// Contents of a page in order.
    pub fn contents(&self, id: PageId) -> &[Content] {
        &self.page(id).contents
    }

    /// Parent of a page, `None` for the root.
    pub fn parent(&self, id: PageId) -> Option<PageId> {
        self.page(id).parent
    }

    /// Whether a page is the tree root.
    pub fn is_root(&self, id: PageId) -> bool {
        self.page(id).is_root()
    }

    /// Root of the tree containing a page.
    pub fn root_of(&self, id: PageId) -> PageId {
        self.page(id).root.unwrap_or(id)
    }

    /// Whether a page has children.
    pub fn has_children(&self, id: PageId) -> bool {
        !self.page(id).children.is_empty()
    }

    /// Whether a page or any page below it has contents.
    pub fn has_content(&self, id: PageId) -> bool {
        let page = self.page(id);
        !page.contents.is_empty() || page.children.iter().any(|&c| self.has_content(c))
    }

    /// Return the child of `parent` whose slug matches `title`, creating it
    /// with `order` when there is none.
    ///
    /// Slugs are compared case-insensitively. The order of an existing child
    /// is left unchanged.
    pub fn resolve_or_create_child(&mut self, parent: PageId, title: &str, order: i64) -> PageId {
        let slug = slugify(title);
        if let Some(&existing) = self
            .children(parent)
            .iter()
            .find(|&&child| same_slug(self.page(child).slug(), &slug))
        {
            return existing;
        }

        let id = PageId(self.pages.len());
        let root = Some(self.root_of(parent));
        self.pages.push(Page::new(title.to_owned(), order, Some(parent), root));

        let pages = &self.pages;
        let siblings = &self.pages[parent.0].children;
        let at = siblings.partition_point(|&c| pages[c.0].order <= order);
        self.pages[parent.0].children.insert(at, id);

        tracing::debug!(title, parent = parent.0, order, "Created page");
        id
    }

    /// Insert content below `page` following its target path.
    ///
    /// Missing pages along the path are created with the content's order.
    /// The content is placed after every existing content of equal or lower
    /// order. Empty content is dropped.
    ///
    /// Returns the page that received the content.
    pub fn insert_content(&mut self, page: PageId, content: Content) -> Option<PageId> {
        if content.is_empty() {
            return None;
        }

        let segments: Vec<String> = content.segments().map(str::to_owned).collect();
        let target = segments.iter().fold(page, |current, segment| {
            self.resolve_or_create_child(current, segment, content.order)
        });

        let contents = &mut self.pages[target.0].contents;
        let at = contents.partition_point(|c| c.order <= content.order);
        contents.insert(at, content);
        Some(target)
    }

    /// URL of a page: `/` for the root, otherwise the slugs from the root.
    pub fn href(&self, id: PageId) -> String {
        let mut slugs = Vec::new();
        let mut current = id;
        while let Some(parent) = self.page(current).parent {
            slugs.push(self.page(current).slug());
            current = parent;
        }
        slugs.reverse();
        format!("/{}", slugs.join("/"))
    }

    /// Find a page by href, matching slugs case-insensitively.
    pub fn get_page(&self, href: &str) -> Option<PageId> {
        href.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self.root(), |current, segment| {
                self.children(current)
                    .iter()
                    .copied()
                    .find(|&child| same_slug(self.page(child).slug(), segment))
            })
    }

    /// Pages in depth-first order, starting at `id`.
    pub fn descendants(&self, id: PageId) -> Vec<PageId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    /// Indented listing of the tree with titles and hrefs.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, self.root(), 0);
        out
    }

    fn write_outline(&self, out: &mut String, id: PageId, level: usize) {
        let indent = "  ".repeat(level);
        let page = self.page(id);
        let _ = writeln!(out, "{indent}- {}", page.title());
        let _ = writeln!(out, "{indent}  href={}", self.href(id));
        for &child in page.children() {
            self.write_outline(out, child, level + 1);
        }
    }
}
