//! The media index: the mapping from opaque locators to file paths.
//!
//! Acquisition produces locators, not paths; this index is the only place
//! they are resolved to readable byte-sources. The SQLite implementation
//! also records capture destinations before the capture action launches, so
//! the session can hand the platform a locator to write into.

use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AcquireError;
use crate::types::Locator;

const LOCATOR_PREFIX: &str = "media://";

/// Read/insert access to the locator -> path mapping.
pub trait MediaIndex {
    /// Look up the file path stored for a locator.
    ///
    /// Returns `Ok(None)` when the index has no matching row; the statement
    /// is released on every exit path.
    fn path_for(&self, locator: &Locator) -> Result<Option<PathBuf>, AcquireError>;

    /// Register a new entry and return its freshly minted locator.
    fn create_entry(
        &self,
        title: &str,
        description: &str,
        path: &Path,
    ) -> Result<Locator, AcquireError>;
}

/// SQLite-backed media index.
pub struct SqliteMediaIndex {
    conn: Connection,
}

impl SqliteMediaIndex {
    /// Open (or create) an index database at `path`.
    pub fn open(path: &Path) -> Result<Self, AcquireError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open a transient in-memory index.
    pub fn open_in_memory() -> Result<Self, AcquireError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, AcquireError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS media (
                id          INTEGER PRIMARY KEY,
                path        TEXT NOT NULL,
                title       TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                created_at  INTEGER NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    /// Parse the row id out of a `media://` locator.
    ///
    /// A locator in any other scheme can never match a row, so it maps to
    /// `None` rather than an error.
    fn row_id(locator: &Locator) -> Option<i64> {
        locator
            .as_str()
            .strip_prefix(LOCATOR_PREFIX)?
            .parse()
            .ok()
    }

    fn locator_for_row(id: i64) -> Locator {
        Locator::new(format!("{}{}", LOCATOR_PREFIX, id))
    }

    fn now_epoch_secs() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

impl MediaIndex for SqliteMediaIndex {
    fn path_for(&self, locator: &Locator) -> Result<Option<PathBuf>, AcquireError> {
        let Some(id) = Self::row_id(locator) else {
            return Ok(None);
        };

        let path: Option<String> = self
            .conn
            .query_row("SELECT path FROM media WHERE id = ?1", [id], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(path.map(PathBuf::from))
    }

    fn create_entry(
        &self,
        title: &str,
        description: &str,
        path: &Path,
    ) -> Result<Locator, AcquireError> {
        self.conn.execute(
            "INSERT INTO media (path, title, description, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                path.to_string_lossy().into_owned(),
                title,
                description,
                Self::now_epoch_secs()
            ],
        )?;
        let locator = Self::locator_for_row(self.conn.last_insert_rowid());
        tracing::debug!("Indexed {:?} as {}", path, locator);
        Ok(locator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve_entry() {
        let index = SqliteMediaIndex::open_in_memory().unwrap();
        let locator = index
            .create_entry("a title", "a description", Path::new("/photos/one.jpg"))
            .unwrap();

        let path = index.path_for(&locator).unwrap();
        assert_eq!(path, Some(PathBuf::from("/photos/one.jpg")));
    }

    #[test]
    fn test_unknown_locator_is_none() {
        let index = SqliteMediaIndex::open_in_memory().unwrap();
        let missing = index.path_for(&Locator::new("media://42")).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_foreign_scheme_locator_is_none() {
        let index = SqliteMediaIndex::open_in_memory().unwrap();
        index
            .create_entry("t", "d", Path::new("/photos/one.jpg"))
            .unwrap();

        assert!(index
            .path_for(&Locator::new("content://other/1"))
            .unwrap()
            .is_none());
        assert!(index
            .path_for(&Locator::new("media://not-a-number"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_entries_get_distinct_locators() {
        let index = SqliteMediaIndex::open_in_memory().unwrap();
        let first = index
            .create_entry("t", "d", Path::new("/photos/one.jpg"))
            .unwrap();
        let second = index
            .create_entry("t", "d", Path::new("/photos/two.jpg"))
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(
            index.path_for(&second).unwrap(),
            Some(PathBuf::from("/photos/two.jpg"))
        );
    }

    #[test]
    fn test_open_on_disk_persists() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("index.db");

        let locator = {
            let index = SqliteMediaIndex::open(&db).unwrap();
            index
                .create_entry("t", "d", Path::new("/photos/kept.jpg"))
                .unwrap()
        };

        let reopened = SqliteMediaIndex::open(&db).unwrap();
        assert_eq!(
            reopened.path_for(&locator).unwrap(),
            Some(PathBuf::from("/photos/kept.jpg"))
        );
    }
}
