//! Keyword-indexed snippet storage.
//!
//! One SQLite table holds every snippet:
//!
//! ```text
//! snippets(keyword TEXT PRIMARY KEY, message TEXT, hidden BOOLEAN DEFAULT FALSE)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use snippets::store::SnippetStore;
//!
//! let mut store = SnippetStore::open("snippets.db")?;
//! store.put("alpha", "hello world", false)?;
//! assert_eq!(store.get("alpha")?.as_deref(), Some("hello world"));
//!
//! for entry in store.catalog()? {
//!     println!("{}", entry.keyword);
//! }
//! store.close()?;
//! ```

mod db;
mod schema;

pub use db::SnippetStore;
pub use schema::{CatalogEntry, Snippet};
