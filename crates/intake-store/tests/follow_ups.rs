use chrono::Utc;
use intake_core::domain::FollowUpStatus;
use intake_core::rules::FollowUpFields;
use intake_core::CoreError;
use intake_store::error::StoreError;
use intake_store::repo::{FollowUpNew, InquiryNew};
use intake_store::Store;

fn open_store() -> Store {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
}

fn follow_up_new(at: &str, remarks: &str, inquiry_name: Option<&str>) -> FollowUpNew {
    FollowUpNew {
        fields: FollowUpFields {
            follow_up_date_time: Some(at.to_string()),
            remarks: Some(remarks.to_string()),
            ..FollowUpFields::default()
        },
        inquiry_name: inquiry_name.map(str::to_string),
    }
}

#[test]
fn create_copies_inquiry_name_and_defaults_status() {
    let store = open_store();
    let follow_up = store
        .follow_ups()
        .create(
            Utc::now(),
            follow_up_new("2024-01-01T10:00", "called", Some("A")),
        )
        .expect("create");

    assert_eq!(follow_up.inquiry_name, "A");
    assert_eq!(follow_up.status, FollowUpStatus::New);
    assert!(!follow_up.added_at.is_empty());
    assert_eq!(store.follow_ups().list().expect("list"), vec![follow_up]);
}

#[test]
fn create_without_inquiry_context_uses_unknown() {
    let store = open_store();
    let follow_up = store
        .follow_ups()
        .create(Utc::now(), follow_up_new("2024-01-01T10:00", "called", None))
        .expect("create");
    assert_eq!(follow_up.inquiry_name, "Unknown");
}

#[test]
fn create_requires_date_time_and_remarks() {
    let store = open_store();
    let err = store
        .follow_ups()
        .create(Utc::now(), follow_up_new(" ", "called", Some("A")))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::EmptyFollowUpDateTime)
    ));

    let err = store
        .follow_ups()
        .create(Utc::now(), follow_up_new("2024-01-01T10:00", "", Some("A")))
        .unwrap_err();
    assert!(matches!(err, StoreError::Core(CoreError::EmptyRemarks)));

    assert!(store.follow_ups().list().expect("list").is_empty());
}

#[test]
fn renaming_is_not_propagated_and_deletes_do_not_cascade() {
    let store = open_store();
    let inquiry = store
        .inquiries()
        .create(
            Utc::now(),
            InquiryNew {
                name: "A".to_string(),
                contact: "555".to_string(),
                ..InquiryNew::default()
            },
        )
        .expect("inquiry");
    let follow_up = store
        .follow_ups()
        .create(
            Utc::now(),
            follow_up_new("2024-01-01T10:00", "called", Some(&inquiry.name)),
        )
        .expect("follow-up");

    assert!(store.inquiries().delete(&inquiry.id).expect("delete"));
    assert_eq!(store.follow_ups().list().expect("list"), vec![follow_up.clone()]);

    assert!(store.follow_ups().delete(&follow_up.id).expect("delete"));
    assert!(!store.follow_ups().delete(&follow_up.id).expect("delete again"));
    assert!(store.follow_ups().list().expect("list").is_empty());
}

#[test]
fn follow_ups_keep_insertion_order() {
    let store = open_store();
    for remarks in ["first", "second", "third"] {
        store
            .follow_ups()
            .create(
                Utc::now(),
                follow_up_new("2024-01-01T10:00", remarks, Some("A")),
            )
            .expect("create");
    }
    let remarks: Vec<String> = store
        .follow_ups()
        .list()
        .expect("list")
        .into_iter()
        .map(|follow_up| follow_up.remarks)
        .collect();
    assert_eq!(remarks, vec!["first", "second", "third"]);
}
