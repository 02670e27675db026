use crate::backend::{BlobBackend, BlobKey};
use crate::error::Result;
use crate::repo::collection::{Collection, Merged};
use chrono::{DateTime, Utc};
use intake_core::domain::{canonical_source, Inquiry, InquiryId, Programs};
use intake_core::rules::{normalize_optional, FollowUpFields};
use intake_core::time::{format_timestamp, local_date};

#[derive(Debug, Clone, Default)]
pub struct InquiryNew {
    pub name: String,
    pub contact: String,
    pub programs: Programs,
    pub discussion: Option<String>,
    pub source: Option<String>,
    pub taken_by: Option<String>,
    /// Defaults to the local date of creation.
    pub first_contact_date: Option<String>,
    pub follow_up: FollowUpFields,
}

pub struct InquiriesRepo<'a> {
    records: Collection<'a, Inquiry>,
}

impl<'a> InquiriesRepo<'a> {
    pub fn new(backend: &'a dyn BlobBackend) -> Self {
        Self {
            records: Collection::new(backend, BlobKey::Inquiries),
        }
    }

    /// Validates `input` and appends it. Nothing is written when validation fails.
    pub fn create(&self, now: DateTime<Utc>, input: InquiryNew) -> Result<Inquiry> {
        let inquiry = Inquiry {
            id: InquiryId::default(),
            name: input.name.trim().to_string(),
            contact: input.contact.trim().to_string(),
            programs: input.programs,
            discussion: normalize_optional(input.discussion),
            source: normalize_optional(input.source).map(|raw| canonical_source(&raw)),
            taken_by: normalize_optional(input.taken_by),
            first_contact_date: normalize_optional(input.first_contact_date)
                .unwrap_or_else(|| local_date(now)),
            follow_up: input.follow_up.into_state(),
            created_at: format_timestamp(now),
        };
        inquiry.validate()?;
        self.records.append(&inquiry)
    }

    /// All inquiries in insertion order.
    pub fn list(&self) -> Result<Vec<Inquiry>> {
        self.records.list()
    }

    pub fn get(&self, id: &InquiryId) -> Result<Option<Inquiry>> {
        self.records.get(id)
    }

    /// Returns whether a record was removed; a missing id is not an error.
    pub fn delete(&self, id: &InquiryId) -> Result<bool> {
        self.records.remove(id)
    }

    pub(crate) fn import(&self, incoming: &[Inquiry]) -> Result<Merged> {
        self.records.extend_new(incoming)
    }
}
