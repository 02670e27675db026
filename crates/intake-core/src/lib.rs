pub mod domain;
pub mod dto;
pub mod error;
pub mod projection;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use projection::{
    project_follow_up_row, project_inquiry_detail, project_inquiry_row, DisplayOptions,
};
pub use rules::*;
