pub mod fields;
pub mod text;

pub use fields::FollowUpFields;
pub use text::{inquiry_name_or_unknown, normalize_optional};
