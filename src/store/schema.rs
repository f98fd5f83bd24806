//! Snippet data types returned by the store.

use serde::Serialize;

/// A stored snippet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Unique name of the snippet.
    pub keyword: String,
    /// Stored text body.
    pub message: String,
    /// Hidden snippets are left out of catalog and search.
    pub hidden: bool,
}

impl Snippet {
    #[must_use]
    pub fn new(keyword: impl Into<String>, message: impl Into<String>, hidden: bool) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
            hidden,
        }
    }
}

/// One line of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub keyword: String,
    pub hidden: bool,
}
