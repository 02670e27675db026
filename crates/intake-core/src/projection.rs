//! Read-only display projections of stored records.
//!
//! Every function here is pure: it takes a record and the display options
//! and derives the strings shown in list and detail views.

use crate::domain::{
    FollowUp, FollowUpDetails, FollowUpStatus, Inquiry, Programs, UNKNOWN_INQUIRY_NAME,
};
use crate::dto::{FollowUpDetailView, FollowUpRow, InquiryDetail, InquiryRow};
use crate::time::{format_display, DEFAULT_DATETIME_FORMAT};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_PROGRAMS: &str = "None";
pub const NO_PROGRAMS_SELECTED: &str = "None selected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub datetime_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl DisplayOptions {
    fn date(&self, raw: Option<&str>) -> String {
        format_display(raw, &self.datetime_format)
    }
}

pub fn program_labels(programs: &Programs) -> Vec<String> {
    programs
        .enabled()
        .map(|program| program.label().to_string())
        .collect()
}

pub fn programs_label(programs: &Programs) -> String {
    let labels = program_labels(programs);
    if labels.is_empty() {
        NO_PROGRAMS.to_string()
    } else {
        labels.join(", ")
    }
}

pub fn project_inquiry_row(inquiry: &Inquiry, options: &DisplayOptions) -> InquiryRow {
    let status = inquiry.follow_up.status();
    InquiryRow {
        id: inquiry.id.clone(),
        name: inquiry.name.clone(),
        contact: inquiry.contact.clone(),
        programs: programs_label(&inquiry.programs),
        source: or_not_available(inquiry.source.as_deref()),
        status: status.as_str().to_string(),
        status_color: status.color(),
        first_contact_date: options.date(Some(&inquiry.first_contact_date)),
        taken_by: or_not_available(inquiry.taken_by.as_deref()),
    }
}

pub fn project_follow_up_row(follow_up: &FollowUp, options: &DisplayOptions) -> FollowUpRow {
    let status = follow_up.status.displayed();
    FollowUpRow {
        id: follow_up.id.clone(),
        inquiry_name: non_blank(Some(&follow_up.inquiry_name))
            .unwrap_or(UNKNOWN_INQUIRY_NAME)
            .to_string(),
        follow_up_date_time: options.date(Some(&follow_up.follow_up_date_time)),
        status: status.as_str().to_string(),
        status_color: status.color(),
        remarks: or_not_available(Some(&follow_up.remarks)),
    }
}

pub fn project_inquiry_detail(inquiry: &Inquiry, options: &DisplayOptions) -> InquiryDetail {
    let status = inquiry.follow_up.status();
    let mut programs = program_labels(&inquiry.programs);
    if programs.is_empty() {
        programs.push(NO_PROGRAMS_SELECTED.to_string());
    }
    InquiryDetail {
        id: inquiry.id.clone(),
        name: inquiry.name.clone(),
        contact: inquiry.contact.clone(),
        programs,
        discussion: or_not_available(inquiry.discussion.as_deref()),
        source: or_not_available(inquiry.source.as_deref()),
        taken_by: or_not_available(inquiry.taken_by.as_deref()),
        first_contact_date: options.date(Some(&inquiry.first_contact_date)),
        status_label: status.label().to_string(),
        status: status.as_str().to_string(),
        status_color: status.color(),
        created_at: options.date(Some(&inquiry.created_at)),
        follow_up: inquiry
            .follow_up
            .details()
            .map(|details| follow_up_detail_view(details, options)),
    }
}

fn follow_up_detail_view(
    details: &FollowUpDetails,
    options: &DisplayOptions,
) -> FollowUpDetailView {
    let date = |raw: &Option<String>| non_blank(raw.as_deref()).map(|v| options.date(Some(v)));
    FollowUpDetailView {
        follow_up_date_time: date(&details.follow_up_date_time),
        remarks: non_blank(details.remarks.as_deref()).map(str::to_string),
        demo_start_date: date(&details.demo_start_date),
        demo_end_date: date(&details.demo_end_date),
        next_follow_up_date: date(&details.next_follow_up_date),
    }
}

/// Status filter used by list views; `new` also matches blank stored values.
pub fn status_matches(status: &FollowUpStatus, wanted: &FollowUpStatus) -> bool {
    status.displayed() == *wanted
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn or_not_available(value: Option<&str>) -> String {
    non_blank(value).unwrap_or(NOT_AVAILABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::{
        project_follow_up_row, project_inquiry_detail, project_inquiry_row, programs_label,
        status_matches, DisplayOptions,
    };
    use crate::domain::{
        FollowUp, FollowUpDetails, FollowUpState, FollowUpStatus, Inquiry, Programs, StatusColor,
    };

    fn inquiry() -> Inquiry {
        Inquiry {
            id: "i1".parse().unwrap(),
            name: "A".to_string(),
            contact: "555-1234".to_string(),
            programs: Programs::default(),
            discussion: None,
            source: None,
            taken_by: Some(String::new()),
            first_contact_date: "2024-01-01".to_string(),
            follow_up: FollowUpState::NoFollowUp,
            created_at: "not a date".to_string(),
        }
    }

    #[test]
    fn programs_label_joins_enabled_flags() {
        let programs = Programs {
            finger_maths: true,
            phonics: false,
            handwriting: true,
        };
        assert_eq!(programs_label(&programs), "Finger Maths, Handwriting");
        assert_eq!(programs_label(&Programs::default()), "None");
    }

    #[test]
    fn inquiry_row_defaults() {
        let row = project_inquiry_row(&inquiry(), &DisplayOptions::default());
        assert_eq!(row.programs, "None");
        assert_eq!(row.source, "N/A");
        assert_eq!(row.taken_by, "N/A");
        assert_eq!(row.status, "new");
        assert_eq!(row.status_color, StatusColor::Default);
        assert_eq!(row.first_contact_date, "2024-01-01 00:00");
    }

    #[test]
    fn inquiry_row_uses_embedded_status() {
        let mut record = inquiry();
        record.follow_up = FollowUpState::FollowUp(FollowUpDetails {
            status: FollowUpStatus::Enrolled,
            ..FollowUpDetails::default()
        });
        let row = project_inquiry_row(&record, &DisplayOptions::default());
        assert_eq!(row.status, "enrolled");
        assert_eq!(row.status_color, StatusColor::Success);
    }

    #[test]
    fn follow_up_row_defaults() {
        let follow_up = FollowUp {
            id: "f1".parse().unwrap(),
            follow_up_date_time: "2024-01-01T10:00".to_string(),
            remarks: " ".to_string(),
            status: FollowUpStatus::Other(String::new()),
            demo_start_date: None,
            demo_end_date: None,
            next_follow_up_date: None,
            inquiry_name: String::new(),
            added_at: String::new(),
        };
        let row = project_follow_up_row(&follow_up, &DisplayOptions::default());
        assert_eq!(row.inquiry_name, "Unknown");
        assert_eq!(row.remarks, "N/A");
        assert_eq!(row.status, "new");
        assert_eq!(row.follow_up_date_time, "2024-01-01 10:00");
    }

    #[test]
    fn detail_lists_only_present_follow_up_fields() {
        let mut record = inquiry();
        record.follow_up = FollowUpState::FollowUp(FollowUpDetails {
            remarks: Some("wants a demo".to_string()),
            demo_start_date: Some("2024-02-01".to_string()),
            status: FollowUpStatus::Interested,
            ..FollowUpDetails::default()
        });
        let detail = project_inquiry_detail(&record, &DisplayOptions::default());
        assert_eq!(detail.programs, vec!["None selected".to_string()]);
        assert_eq!(detail.status_label, "Interested");
        assert_eq!(detail.created_at, "not a date");
        let follow_up = detail.follow_up.expect("follow-up section");
        assert_eq!(follow_up.remarks.as_deref(), Some("wants a demo"));
        assert_eq!(follow_up.demo_start_date.as_deref(), Some("2024-02-01 00:00"));
        assert_eq!(follow_up.follow_up_date_time, None);
        assert_eq!(follow_up.demo_end_date, None);
    }

    #[test]
    fn detail_without_follow_up_has_no_section() {
        let detail = project_inquiry_detail(&inquiry(), &DisplayOptions::default());
        assert!(detail.follow_up.is_none());
        assert_eq!(detail.discussion, "N/A");
    }

    #[test]
    fn status_filter_treats_blank_as_new() {
        assert!(status_matches(
            &FollowUpStatus::Other(String::new()),
            &FollowUpStatus::New
        ));
        assert!(!status_matches(&FollowUpStatus::Closed, &FollowUpStatus::New));
    }
}
