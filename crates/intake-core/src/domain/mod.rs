pub mod follow_up;
pub mod ids;
pub mod inquiry;
pub mod program;
pub mod source;
pub mod status;

pub use follow_up::{FollowUp, UNKNOWN_INQUIRY_NAME};
pub use ids::{FollowUpId, InquiryId};
pub use inquiry::{FollowUpDetails, FollowUpState, Inquiry};
pub use program::{Program, Programs};
pub use source::{canonical_source, SOURCE_OPTIONS};
pub use status::{status_color, FollowUpStatus, StatusColor};

use serde::{Deserialize, Deserializer};

// Older blobs may carry `null` where a structured value is expected.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
