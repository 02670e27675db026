//! Blob backends. Each store collection lives in one named blob holding a
//! JSON array; every mutation reads the whole blob and writes it back.

use crate::error::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobKey {
    Inquiries,
    FollowUps,
}

impl BlobKey {
    pub fn as_str(self) -> &'static str {
        match self {
            BlobKey::Inquiries => "inquiries",
            BlobKey::FollowUps => "followUps",
        }
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback handed the current blob; returning `Some` replaces it.
pub type BlobUpdate<'f> = dyn FnMut(Option<String>) -> Result<Option<String>> + 'f;

pub trait BlobBackend {
    fn load(&self, key: BlobKey) -> Result<Option<String>>;

    /// Read-modify-write of one blob. When `apply` fails nothing is written.
    fn update(&self, key: BlobKey, apply: &mut BlobUpdate<'_>) -> Result<()>;
}

/// SQLite-backed blobs in the `blobs` table.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl BlobBackend for SqliteBackend {
    fn load(&self, key: BlobKey) -> Result<Option<String>> {
        load_blob(&self.conn, key)
    }

    fn update(&self, key: BlobKey, apply: &mut BlobUpdate<'_>) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let current = load_blob(&tx, key)?;
        if let Some(next) = apply(current)? {
            tx.execute(
                "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at;",
                params![key.as_str(), next, Utc::now().timestamp()],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn load_blob(conn: &Connection, key: BlobKey) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM blobs WHERE key = ?1;",
            [key.as_str()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

/// Process-local blobs, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: RefCell<HashMap<BlobKey, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobBackend for MemoryBackend {
    fn load(&self, key: BlobKey) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(&key).cloned())
    }

    fn update(&self, key: BlobKey, apply: &mut BlobUpdate<'_>) -> Result<()> {
        let current = self.load(key)?;
        if let Some(next) = apply(current)? {
            self.blobs.borrow_mut().insert(key, next);
        }
        Ok(())
    }
}
