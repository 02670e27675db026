mod collection;
pub mod follow_ups;
pub mod inquiries;

pub use follow_ups::{FollowUpNew, FollowUpsRepo};
pub use inquiries::{InquiriesRepo, InquiryNew};
