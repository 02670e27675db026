use crate::domain::{FollowUpId, InquiryId, StatusColor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRow {
    pub id: InquiryId,
    pub name: String,
    pub contact: String,
    pub programs: String,
    pub source: String,
    pub status: String,
    pub status_color: StatusColor,
    pub first_contact_date: String,
    pub taken_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpRow {
    pub id: FollowUpId,
    pub inquiry_name: String,
    pub follow_up_date_time: String,
    pub status: String,
    pub status_color: StatusColor,
    pub remarks: String,
}

/// Follow-up section of the inquiry detail view. Empty fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpDetailView {
    pub follow_up_date_time: Option<String>,
    pub remarks: Option<String>,
    pub demo_start_date: Option<String>,
    pub demo_end_date: Option<String>,
    pub next_follow_up_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDetail {
    pub id: InquiryId,
    pub name: String,
    pub contact: String,
    pub programs: Vec<String>,
    pub discussion: String,
    pub source: String,
    pub taken_by: String,
    pub first_contact_date: String,
    pub status: String,
    pub status_label: String,
    pub status_color: StatusColor,
    pub created_at: String,
    pub follow_up: Option<FollowUpDetailView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDto {
    pub inquiries: Vec<InquiryRow>,
    pub follow_ups: Vec<FollowUpRow>,
}
