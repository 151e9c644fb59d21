//! Page nodes of the site tree.

use crate::content::Content;

/// Index of a page in its [`Site`](crate::Site).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub(crate) usize);

impl PageId {
    /// Position of the page in the site arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A page of the site tree.
///
/// Pages are only created and mutated through [`Site`](crate::Site).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) order: i64,
    pub(crate) children: Vec<PageId>,
    pub(crate) contents: Vec<Content>,
    pub(crate) parent: Option<PageId>,
    pub(crate) root: Option<PageId>,
}

impl Page {
    pub(crate) fn new(
        title: String,
        order: i64,
        parent: Option<PageId>,
        root: Option<PageId>,
    ) -> Self {
        Self {
            slug: crate::slug::slugify(&title),
            title,
            order,
            children: Vec::new(),
            contents: Vec::new(),
            parent,
            root,
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Kebab-case slug of the title.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Sort key among siblings.
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Children ordered by ascending order, ties in creation order.
    pub fn children(&self) -> &[PageId] {
        &self.children
    }

    /// Contents ordered by ascending order, ties in arrival order.
    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    /// Parent page, `None` for the root.
    pub fn parent(&self) -> Option<PageId> {
        self.parent
    }

    /// Whether this page is the tree root.
    pub fn is_root(&self) -> bool {
        self.root.is_none()
    }
}
