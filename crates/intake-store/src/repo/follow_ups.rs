use crate::backend::{BlobBackend, BlobKey};
use crate::error::Result;
use crate::repo::collection::{Collection, Merged};
use chrono::{DateTime, Utc};
use intake_core::domain::{FollowUp, FollowUpId};
use intake_core::rules::{inquiry_name_or_unknown, FollowUpFields};
use intake_core::time::format_timestamp;

#[derive(Debug, Clone, Default)]
pub struct FollowUpNew {
    pub fields: FollowUpFields,
    /// Name of the inquiry in context when the follow-up is recorded.
    pub inquiry_name: Option<String>,
}

pub struct FollowUpsRepo<'a> {
    records: Collection<'a, FollowUp>,
}

impl<'a> FollowUpsRepo<'a> {
    pub fn new(backend: &'a dyn BlobBackend) -> Self {
        Self {
            records: Collection::new(backend, BlobKey::FollowUps),
        }
    }

    pub fn create(&self, now: DateTime<Utc>, input: FollowUpNew) -> Result<FollowUp> {
        let fields = input.fields.normalized();
        let follow_up = FollowUp {
            id: FollowUpId::default(),
            follow_up_date_time: fields.follow_up_date_time.unwrap_or_default(),
            remarks: fields.remarks.unwrap_or_default(),
            status: fields.status,
            demo_start_date: fields.demo_start_date,
            demo_end_date: fields.demo_end_date,
            next_follow_up_date: fields.next_follow_up_date,
            inquiry_name: inquiry_name_or_unknown(input.inquiry_name.as_deref()),
            added_at: format_timestamp(now),
        };
        follow_up.validate()?;
        self.records.append(&follow_up)
    }

    pub fn list(&self) -> Result<Vec<FollowUp>> {
        self.records.list()
    }

    pub fn get(&self, id: &FollowUpId) -> Result<Option<FollowUp>> {
        self.records.get(id)
    }

    pub fn delete(&self, id: &FollowUpId) -> Result<bool> {
        self.records.remove(id)
    }

    pub(crate) fn import(&self, incoming: &[FollowUp]) -> Result<Merged> {
        self.records.extend_new(incoming)
    }
}
