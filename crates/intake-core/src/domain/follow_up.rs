use crate::domain::ids::FollowUpId;
use crate::domain::status::FollowUpStatus;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_INQUIRY_NAME: &str = "Unknown";

/// Standalone follow-up. `inquiry_name` is a copy of the inquiry's name at
/// creation time, not a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub id: FollowUpId,
    #[serde(default)]
    pub follow_up_date_time: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub status: FollowUpStatus,
    #[serde(default)]
    pub demo_start_date: Option<String>,
    #[serde(default)]
    pub demo_end_date: Option<String>,
    #[serde(default)]
    pub next_follow_up_date: Option<String>,
    #[serde(default = "unknown_inquiry_name")]
    pub inquiry_name: String,
    #[serde(default)]
    pub added_at: String,
}

impl FollowUp {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.follow_up_date_time.trim().is_empty() {
            return Err(CoreError::EmptyFollowUpDateTime);
        }
        if self.remarks.trim().is_empty() {
            return Err(CoreError::EmptyRemarks);
        }
        Ok(())
    }
}

fn unknown_inquiry_name() -> String {
    UNKNOWN_INQUIRY_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::{FollowUp, UNKNOWN_INQUIRY_NAME};
    use crate::domain::status::FollowUpStatus;
    use crate::error::CoreError;
    use serde_json::json;

    #[test]
    fn decode_defaults_inquiry_name_and_status() {
        let raw = json!({
            "id": "1704103200001",
            "followUpDateTime": "2024-01-01T10:00",
            "remarks": "called"
        });
        let record: FollowUp = serde_json::from_value(raw).unwrap();
        assert_eq!(record.inquiry_name, UNKNOWN_INQUIRY_NAME);
        assert_eq!(record.status, FollowUpStatus::New);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn validate_requires_date_time_and_remarks() {
        let mut record: FollowUp = serde_json::from_value(json!({ "id": "x" })).unwrap();
        assert_eq!(record.validate(), Err(CoreError::EmptyFollowUpDateTime));
        record.follow_up_date_time = "2024-01-01T10:00".to_string();
        assert_eq!(record.validate(), Err(CoreError::EmptyRemarks));
    }

    #[test]
    fn serializes_camel_case() {
        let raw = json!({
            "id": "f1",
            "followUpDateTime": "2024-01-01T10:00",
            "remarks": "called",
            "status": "enrolled",
            "inquiryName": "A",
            "addedAt": "2024-01-01T10:05:00.000Z"
        });
        let record: FollowUp = serde_json::from_value(raw).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["inquiryName"], "A");
        assert_eq!(value["status"], "enrolled");
        assert_eq!(value["addedAt"], "2024-01-01T10:05:00.000Z");
    }
}
