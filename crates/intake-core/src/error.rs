use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("contact is required")]
    EmptyContact,
    #[error("follow-up date & time is required")]
    EmptyFollowUpDateTime,
    #[error("remarks are required")]
    EmptyRemarks,
    #[error(
        "invalid status: {0} (expected new|contacted|interested|not-interested|enrolled|closed)"
    )]
    InvalidStatus(String),
    #[error("invalid program: {0} (expected finger-maths|phonics|handwriting)")]
    InvalidProgram(String),
    #[error("invalid id")]
    InvalidId,
}

