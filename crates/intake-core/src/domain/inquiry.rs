use crate::domain::ids::InquiryId;
use crate::domain::null_as_default;
use crate::domain::program::Programs;
use crate::domain::status::FollowUpStatus;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpDetails {
    #[serde(default)]
    pub follow_up_date_time: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: FollowUpStatus,
    #[serde(default)]
    pub demo_start_date: Option<String>,
    #[serde(default)]
    pub demo_end_date: Option<String>,
    #[serde(default)]
    pub next_follow_up_date: Option<String>,
}

/// Follow-up state embedded in an inquiry. Persisted as `null` or an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "Option<FollowUpDetails>",
    into = "Option<FollowUpDetails>"
)]
pub enum FollowUpState {
    #[default]
    NoFollowUp,
    FollowUp(FollowUpDetails),
}

impl FollowUpState {
    pub fn details(&self) -> Option<&FollowUpDetails> {
        match self {
            FollowUpState::NoFollowUp => None,
            FollowUpState::FollowUp(details) => Some(details),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FollowUpState::NoFollowUp)
    }

    /// Status shown for the owning inquiry.
    pub fn status(&self) -> FollowUpStatus {
        self.details()
            .map(|details| details.status.displayed())
            .unwrap_or_default()
    }
}

impl From<Option<FollowUpDetails>> for FollowUpState {
    fn from(value: Option<FollowUpDetails>) -> Self {
        match value {
            Some(details) => FollowUpState::FollowUp(details),
            None => FollowUpState::NoFollowUp,
        }
    }
}

impl From<FollowUpState> for Option<FollowUpDetails> {
    fn from(value: FollowUpState) -> Self {
        match value {
            FollowUpState::NoFollowUp => None,
            FollowUpState::FollowUp(details) => Some(details),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Required even in legacy records; every writer has always assigned one.
    pub id: InquiryId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub programs: Programs,
    #[serde(default)]
    pub discussion: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub taken_by: Option<String>,
    #[serde(default)]
    pub first_contact_date: String,
    #[serde(default, rename = "followUpDetails")]
    pub follow_up: FollowUpState,
    #[serde(default)]
    pub created_at: String,
}

impl Inquiry {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if self.contact.trim().is_empty() {
            return Err(CoreError::EmptyContact);
        }
        Ok(())
    }
}
