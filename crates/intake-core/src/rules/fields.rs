use crate::domain::{FollowUpDetails, FollowUpState, FollowUpStatus};
use crate::rules::text::normalize_optional;

/// The six follow-up fields as entered alongside an inquiry or on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowUpFields {
    pub follow_up_date_time: Option<String>,
    pub remarks: Option<String>,
    pub status: FollowUpStatus,
    pub demo_start_date: Option<String>,
    pub demo_end_date: Option<String>,
    pub next_follow_up_date: Option<String>,
}

impl FollowUpFields {
    pub fn normalized(self) -> Self {
        Self {
            follow_up_date_time: normalize_optional(self.follow_up_date_time),
            remarks: normalize_optional(self.remarks),
            status: self.status,
            demo_start_date: normalize_optional(self.demo_start_date),
            demo_end_date: normalize_optional(self.demo_end_date),
            next_follow_up_date: normalize_optional(self.next_follow_up_date),
        }
    }

    /// True when every field is empty and the status is still `new`.
    pub fn is_blank(&self) -> bool {
        let empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(|raw| raw.trim().is_empty())
                .unwrap_or(true)
        };
        empty(&self.follow_up_date_time)
            && empty(&self.remarks)
            && self.status.is_new()
            && empty(&self.demo_start_date)
            && empty(&self.demo_end_date)
            && empty(&self.next_follow_up_date)
    }

    pub fn into_state(self) -> FollowUpState {
        let fields = self.normalized();
        if fields.is_blank() {
            return FollowUpState::NoFollowUp;
        }
        FollowUpState::FollowUp(FollowUpDetails {
            follow_up_date_time: fields.follow_up_date_time,
            remarks: fields.remarks,
            status: fields.status,
            demo_start_date: fields.demo_start_date,
            demo_end_date: fields.demo_end_date,
            next_follow_up_date: fields.next_follow_up_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::FollowUpFields;
    use crate::domain::{FollowUpState, FollowUpStatus};

    #[test]
    fn blank_fields_produce_no_follow_up() {
        let fields = FollowUpFields {
            remarks: Some("   ".to_string()),
            ..FollowUpFields::default()
        };
        assert_eq!(fields.into_state(), FollowUpState::NoFollowUp);
    }

    #[test]
    fn non_new_status_alone_produces_follow_up() {
        let fields = FollowUpFields {
            status: FollowUpStatus::Contacted,
            ..FollowUpFields::default()
        };
        let state = fields.into_state();
        let details = state.details().expect("details");
        assert_eq!(details.status, FollowUpStatus::Contacted);
        assert_eq!(details.remarks, None);
    }

    #[test]
    fn any_single_field_produces_follow_up() {
        let cases = [
            FollowUpFields {
                follow_up_date_time: Some("2024-01-01T10:00".to_string()),
                ..FollowUpFields::default()
            },
            FollowUpFields {
                demo_start_date: Some("2024-01-02".to_string()),
                ..FollowUpFields::default()
            },
            FollowUpFields {
                demo_end_date: Some("2024-01-03".to_string()),
                ..FollowUpFields::default()
            },
            FollowUpFields {
                next_follow_up_date: Some("2024-01-04".to_string()),
                ..FollowUpFields::default()
            },
        ];
        for fields in cases {
            assert!(!fields.into_state().is_none());
        }
    }
}
