//! Hierarchical page tree for Auteur.
//!
//! A [`Site`] starts with a single root page. Documentation fragments
//! ([`Content`]) are inserted along their target path, creating intermediate
//! pages on demand. Pages are matched by slug, case-insensitively, so
//! `Getting Started` and `getting-started` resolve to the same page.
//!
//! Children and contents are kept sorted by `order`. Items with equal order
//! stay in arrival order.
//!
//! # Example
//!
//! ```
//! use auteur_site::{Content, Site};
//!
//! let mut site = Site::new("Handbook");
//! let root = site.root();
//! let page = site
//!     .insert_content(root, Content::new("<p>Setup</p>").with_path("Guides/Install"))
//!     .unwrap();
//! assert_eq!(site.href(page), "/guides/install");
//! ```

mod content;
mod page;
mod site;
mod slug;
mod snapshot;

pub use content::Content;
pub use page::{Page, PageId};
pub use site::Site;
pub use slug::slugify;
pub use snapshot::{ContentSnapshot, PageSnapshot, SiteSnapshot};
