//! SQLite operations for snippet storage.
//!
//! Every operation is a single statement in autocommit mode, except
//! [`SnippetStore::put_keep_visibility`], which reads its row back inside one
//! transaction.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info, instrument};

use super::schema::{CatalogEntry, Snippet};
use crate::error::{Result, ResultExt, SnipError};

/// SQLite schema for snippet storage.
const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY NOT NULL,
    message TEXT NOT NULL,
    hidden  BOOLEAN NOT NULL DEFAULT FALSE
);
";

/// Owns the database connection for the lifetime of one CLI invocation.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Opens or creates a database at the given path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SnipError::DatabaseOpen {
                path: path.display().to_string(),
                reason: format!("cannot create {}: {e}", parent.display()),
            })?;
        }

        debug!("Connecting to snippet database");
        let conn = Connection::open(path).map_err(|e| SnipError::DatabaseOpen {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let store = Self { conn };
        store.init_schema()?;
        debug!("Database connection established");
        Ok(store)
    }

    /// Creates an in-memory database (useful for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| SnipError::DatabaseOpen {
            path: ":memory:".to_string(),
            reason: e.to_string(),
        })?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA_SQL)
            .context("Failed to initialize schema")
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    #[instrument(skip_all)]
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")?;
        debug!("Database connection closed");
        Ok(())
    }

    /// Stores a snippet, overwriting the message and hidden flag of an
    /// existing snippet with the same keyword.
    #[instrument(skip(self, message), fields(len = message.len()))]
    pub fn put(&mut self, keyword: &str, message: &str, hidden: bool) -> Result<Snippet> {
        validate_keyword(keyword)?;
        info!(keyword, hidden, "Storing snippet");

        self.conn
            .execute(
                "INSERT INTO snippets (keyword, message, hidden) VALUES (?1, ?2, ?3)
                 ON CONFLICT(keyword) DO UPDATE SET
                    message = excluded.message,
                    hidden = excluded.hidden",
                params![keyword, message, hidden],
            )
            .context("Failed to store snippet")?;

        debug!(keyword, "Snippet stored successfully");
        Ok(Snippet::new(keyword, message, hidden))
    }

    /// Stores a snippet without touching the hidden flag of an existing row.
    ///
    /// New snippets start visible. Returns the row as it reads after the write.
    #[instrument(skip(self, message), fields(len = message.len()))]
    pub fn put_keep_visibility(&mut self, keyword: &str, message: &str) -> Result<Snippet> {
        validate_keyword(keyword)?;
        info!(keyword, "Storing snippet, keeping visibility");

        let tx = self
            .conn
            .transaction()
            .context("Failed to start transaction")?;

        tx.execute(
            "INSERT INTO snippets (keyword, message) VALUES (?1, ?2)
             ON CONFLICT(keyword) DO UPDATE SET message = excluded.message",
            params![keyword, message],
        )
        .context("Failed to store snippet")?;

        let hidden: bool = tx
            .query_row(
                "SELECT hidden FROM snippets WHERE keyword = ?1",
                params![keyword],
                |row| row.get(0),
            )
            .context("Failed to read back snippet")?;

        tx.commit().context("Failed to commit transaction")?;

        debug!(keyword, hidden, "Snippet stored successfully");
        Ok(Snippet::new(keyword, message, hidden))
    }

    /// Retrieves the message stored under `keyword`, hidden or not.
    #[instrument(skip(self))]
    pub fn get(&self, keyword: &str) -> Result<Option<String>> {
        info!(keyword, "Retrieving snippet");

        let message: Option<String> = self
            .conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                params![keyword],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to retrieve snippet")?;

        if message.is_some() {
            debug!(keyword, "Snippet retrieved successfully");
        } else {
            debug!(keyword, "Snippet not found");
        }
        Ok(message)
    }

    /// Deletes a snippet by keyword.
    ///
    /// Returns true if a snippet was deleted, false if none existed.
    #[instrument(skip(self))]
    pub fn delete(&mut self, keyword: &str) -> Result<bool> {
        info!(keyword, "Deleting snippet");

        let deleted = self
            .conn
            .execute("DELETE FROM snippets WHERE keyword = ?1", params![keyword])
            .context("Failed to delete snippet")?;

        if deleted > 0 {
            debug!(keyword, "Snippet deleted");
            Ok(true)
        } else {
            debug!(keyword, "Snippet not found for deletion");
            Ok(false)
        }
    }

    /// Lists visible snippets in ascending keyword order.
    #[instrument(skip(self))]
    pub fn catalog(&self) -> Result<Vec<CatalogEntry>> {
        info!("Listing snippet catalog");

        let mut stmt = self
            .conn
            .prepare("SELECT keyword, hidden FROM snippets WHERE NOT hidden ORDER BY keyword ASC")
            .context("Failed to prepare statement")?;

        let entries = stmt
            .query_map([], |row| {
                Ok(CatalogEntry {
                    keyword: row.get(0)?,
                    hidden: row.get(1)?,
                })
            })
            .context("Failed to query catalog")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to collect catalog")?;

        debug!(count = entries.len(), "Listed catalog");
        Ok(entries)
    }

    /// Finds visible snippets whose message contains `pattern`.
    ///
    /// Matching is a case-sensitive literal substring test; `%` and `_` in
    /// the pattern carry no wildcard meaning.
    #[instrument(skip(self))]
    pub fn search(&self, pattern: &str) -> Result<Vec<Snippet>> {
        info!(pattern, "Searching snippets");

        let mut stmt = self
            .conn
            .prepare(
                "SELECT keyword, message, hidden FROM snippets
                 WHERE NOT hidden AND instr(message, ?1) > 0
                 ORDER BY keyword ASC",
            )
            .context("Failed to prepare statement")?;

        let results = stmt
            .query_map(params![pattern], |row| {
                Ok(Snippet {
                    keyword: row.get(0)?,
                    message: row.get(1)?,
                    hidden: row.get(2)?,
                })
            })
            .context("Failed to search snippets")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to collect search results")?;

        debug!(pattern, count = results.len(), "Search finished");
        Ok(results)
    }

    /// Number of rows stored under `keyword` (0 or 1), hidden rows included.
    pub fn count_keyword(&self, keyword: &str) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM snippets WHERE keyword = ?1",
                params![keyword],
                |row| row.get(0),
            )
            .context("Failed to count snippets")
    }
}

fn validate_keyword(keyword: &str) -> Result<()> {
    if keyword.trim().is_empty() {
        return Err(SnipError::EmptyKeyword);
    }
    Ok(())
}
