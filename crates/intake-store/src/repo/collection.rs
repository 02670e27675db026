use crate::backend::{BlobBackend, BlobKey};
use crate::error::{Result, StoreError};
use intake_core::domain::{FollowUp, FollowUpId, Inquiry, InquiryId};
use intake_core::CoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::debug;

pub(crate) trait Record: Clone + Serialize + DeserializeOwned {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
    fn set_id(&mut self, id: Self::Id);
    fn generate_id() -> Self::Id;
    /// Rules a record must meet before it is stored.
    fn check(&self) -> std::result::Result<(), CoreError>;
}

impl Record for Inquiry {
    type Id = InquiryId;

    fn id(&self) -> &InquiryId {
        &self.id
    }

    fn set_id(&mut self, id: InquiryId) {
        self.id = id;
    }

    fn generate_id() -> InquiryId {
        InquiryId::generate()
    }

    fn check(&self) -> std::result::Result<(), CoreError> {
        if self.id.is_blank() {
            return Err(CoreError::InvalidId);
        }
        self.validate()
    }
}

impl Record for FollowUp {
    type Id = FollowUpId;

    fn id(&self) -> &FollowUpId {
        &self.id
    }

    fn set_id(&mut self, id: FollowUpId) {
        self.id = id;
    }

    fn generate_id() -> FollowUpId {
        FollowUpId::generate()
    }

    fn check(&self) -> std::result::Result<(), CoreError> {
        if self.id.is_blank() {
            return Err(CoreError::InvalidId);
        }
        self.validate()
    }
}

/// Outcome of merging foreign records into a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Merged {
    pub(crate) added: usize,
    pub(crate) invalid: usize,
}

/// An ordered record list stored as one JSON blob.
pub(crate) struct Collection<'a, T> {
    backend: &'a dyn BlobBackend,
    key: BlobKey,
    _record: PhantomData<T>,
}

impl<'a, T: Record> Collection<'a, T> {
    pub(crate) fn new(backend: &'a dyn BlobBackend, key: BlobKey) -> Self {
        Self {
            backend,
            key,
            _record: PhantomData,
        }
    }

    pub(crate) fn list(&self) -> Result<Vec<T>> {
        decode(self.key, self.backend.load(self.key)?)
    }

    pub(crate) fn get(&self, id: &T::Id) -> Result<Option<T>> {
        Ok(self.list()?.into_iter().find(|record| record.id() == id))
    }

    /// Appends `record` under an id no stored record uses.
    pub(crate) fn append(&self, record: &T) -> Result<T> {
        let key = self.key;
        let mut created = None;
        self.backend.update(key, &mut |current| {
            let mut records: Vec<T> = decode(key, current)?;
            let mut fresh = record.clone();
            fresh.set_id(unused_id(&records));
            records.push(fresh.clone());
            let encoded = encode(&records)?;
            debug!(key = key.as_str(), count = records.len(), "appended record");
            created = Some(fresh);
            Ok(Some(encoded))
        })?;
        created.ok_or(StoreError::UpdateSkipped(key.as_str()))
    }

    /// Appends every valid record whose id is not stored yet. Records that
    /// fail [`Record::check`] are counted and left out.
    pub(crate) fn extend_new(&self, incoming: &[T]) -> Result<Merged> {
        let key = self.key;
        let mut merged = Merged::default();
        self.backend.update(key, &mut |current| {
            let mut records: Vec<T> = decode(key, current)?;
            merged = Merged::default();
            for record in incoming {
                if let Err(err) = record.check() {
                    debug!(key = key.as_str(), error = %err, "skipped invalid record");
                    merged.invalid += 1;
                    continue;
                }
                if !records.iter().any(|existing| existing.id() == record.id()) {
                    records.push(record.clone());
                    merged.added += 1;
                }
            }
            if merged.added == 0 {
                return Ok(None);
            }
            debug!(key = key.as_str(), added = merged.added, "imported records");
            Ok(Some(encode(&records)?))
        })?;
        Ok(merged)
    }

    /// Removes the first record with `id`. A missing id leaves the blob untouched.
    pub(crate) fn remove(&self, id: &T::Id) -> Result<bool> {
        let key = self.key;
        let mut removed = false;
        self.backend.update(key, &mut |current| {
            let mut records: Vec<T> = decode(key, current)?;
            let Some(position) = records.iter().position(|record| record.id() == id) else {
                return Ok(None);
            };
            records.remove(position);
            removed = true;
            debug!(key = key.as_str(), count = records.len(), "removed record");
            Ok(Some(encode(&records)?))
        })?;
        Ok(removed)
    }
}

fn unused_id<T: Record>(records: &[T]) -> T::Id {
    loop {
        let candidate = T::generate_id();
        if !records.iter().any(|record| *record.id() == candidate) {
            return candidate;
        }
    }
}

pub(crate) fn decode<T: DeserializeOwned>(key: BlobKey, raw: Option<String>) -> Result<Vec<T>> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
                key: key.as_str(),
                source,
            })
        }
        _ => Ok(Vec::new()),
    }
}

pub(crate) fn encode<T: Serialize>(records: &[T]) -> Result<String> {
    serde_json::to_string(records).map_err(StoreError::Encode)
}
