pub mod backend;
pub mod backup;
pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod repo;
pub mod snapshot;

use crate::backend::{BlobBackend, MemoryBackend, SqliteBackend};
use crate::error::Result;
use crate::snapshot::{ImportReport, Snapshot};
use rusqlite::Connection;
use std::path::Path;

/// Inquiry and follow-up stores over an injected blob backend.
pub struct Store<B: BlobBackend = SqliteBackend> {
    backend: B,
}

impl Store<SqliteBackend> {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self::with_backend(SqliteBackend::new(conn)))
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self::with_backend(SqliteBackend::new(conn)))
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(self.connection())
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(self.connection())
    }

    pub fn backup_to(&self, path: &Path) -> Result<()> {
        backup::backup_to(self.connection(), path)
    }

    pub fn connection(&self) -> &Connection {
        self.backend.connection()
    }
}

impl Store<MemoryBackend> {
    pub fn memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }
}

impl<B: BlobBackend> Store<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn inquiries(&self) -> repo::InquiriesRepo<'_> {
        repo::InquiriesRepo::new(&self.backend)
    }

    pub fn follow_ups(&self) -> repo::FollowUpsRepo<'_> {
        repo::FollowUpsRepo::new(&self.backend)
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            inquiries: self.inquiries().list()?,
            follow_ups: self.follow_ups().list()?,
        })
    }

    /// Appends snapshot records whose ids are not stored yet. Records missing
    /// an id or a required field are counted as invalid and not written.
    pub fn import(&self, snapshot: &Snapshot) -> Result<ImportReport> {
        let inquiries = self.inquiries().import(&snapshot.inquiries)?;
        let follow_ups = self.follow_ups().import(&snapshot.follow_ups)?;
        Ok(ImportReport {
            inquiries_added: inquiries.added,
            inquiries_skipped: snapshot.inquiries.len() - inquiries.added - inquiries.invalid,
            inquiries_invalid: inquiries.invalid,
            follow_ups_added: follow_ups.added,
            follow_ups_skipped: snapshot.follow_ups.len() - follow_ups.added - follow_ups.invalid,
            follow_ups_invalid: follow_ups.invalid,
        })
    }
}
