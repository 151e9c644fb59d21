//! Serializable view of the site tree.

use serde::Serialize;

use crate::page::PageId;
use crate::site::Site;

/// Site metadata with the page tree.
#[derive(Debug, Serialize)]
pub struct SiteSnapshot {
    pub title: String,
    pub desc: String,
    pub version: String,
    pub root: PageSnapshot,
}

/// A page with its contents and children.
#[derive(Debug, Serialize)]
pub struct PageSnapshot {
    pub title: String,
    pub slug: String,
    pub href: String,
    pub order: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<ContentSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageSnapshot>,
}

/// A content item of a page.
#[derive(Debug, Serialize)]
pub struct ContentSnapshot {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub order: i64,
    pub markup: String,
}

impl Site {
    /// Owned, serializable copy of the whole tree.
    pub fn snapshot(&self) -> SiteSnapshot {
        SiteSnapshot {
            title: self.title().to_owned(),
            desc: self.description().to_owned(),
            version: self.version().to_owned(),
            root: self.page_snapshot(self.root()),
        }
    }

    fn page_snapshot(&self, id: PageId) -> PageSnapshot {
        let page = self.page(id);
        PageSnapshot {
            title: page.title().to_owned(),
            slug: page.slug().to_owned(),
            href: self.href(id),
            order: page.order(),
            contents: page
                .contents()
                .iter()
                .map(|c| ContentSnapshot {
                    title: c.title.clone(),
                    order: c.order,
                    markup: c.markup.clone(),
                })
                .collect(),
            children: page
                .children()
                .iter()
                .map(|&child| self.page_snapshot(child))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Content, Site};

    #[test]
    fn test_snapshot_json() {
        let mut site = Site::new("Docs").with_version("1.2.0");
        let root = site.root();
        site.insert_content(
            root,
            Content::new("<p>Hi</p>\n")
                .with_path("Guide")
                .with_title("Intro")
                .with_order(1),
        );

        let json = serde_json::to_value(site.snapshot()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Docs",
                "desc": "",
                "version": "1.2.0",
                "root": {
                    "title": "Docs",
                    "slug": "docs",
                    "href": "/",
                    "order": 0,
                    "children": [{
                        "title": "Guide",
                        "slug": "guide",
                        "href": "/guide",
                        "order": 1,
                        "contents": [{
                            "title": "Intro",
                            "order": 1,
                            "markup": "<p>Hi</p>\n"
                        }]
                    }]
                }
            })
        );
    }
}
