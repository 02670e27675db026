use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Follow-up status label. Any value may be set at any time; the status is
/// not a guarded workflow. Unrecognized stored values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FollowUpStatus {
    #[default]
    New,
    Contacted,
    Interested,
    NotInterested,
    Enrolled,
    Closed,
    Other(String),
}

impl FollowUpStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FollowUpStatus::New => "new",
            FollowUpStatus::Contacted => "contacted",
            FollowUpStatus::Interested => "interested",
            FollowUpStatus::NotInterested => "not-interested",
            FollowUpStatus::Enrolled => "enrolled",
            FollowUpStatus::Closed => "closed",
            FollowUpStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FollowUpStatus::New => "New",
            FollowUpStatus::Contacted => "Contacted",
            FollowUpStatus::Interested => "Interested",
            FollowUpStatus::NotInterested => "Not Interested",
            FollowUpStatus::Enrolled => "Enrolled",
            FollowUpStatus::Closed => "Closed",
            FollowUpStatus::Other(raw) => raw,
        }
    }

    /// Strict parse for user input.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match Self::from_known(&normalized) {
            Some(status) => Ok(status),
            None => Err(CoreError::InvalidStatus(raw.trim().to_string())),
        }
    }

    /// Lenient decode for persisted values.
    pub fn from_stored(raw: String) -> Self {
        Self::from_known(&raw).unwrap_or(FollowUpStatus::Other(raw))
    }

    /// Blank stored values display as `new`.
    pub fn is_new(&self) -> bool {
        match self {
            FollowUpStatus::New => true,
            FollowUpStatus::Other(raw) => raw.trim().is_empty(),
            _ => false,
        }
    }

    /// Status as shown in list and detail views.
    pub fn displayed(&self) -> FollowUpStatus {
        if self.is_new() {
            FollowUpStatus::New
        } else {
            self.clone()
        }
    }

    pub fn color(&self) -> StatusColor {
        status_color(self.as_str())
    }

    fn from_known(raw: &str) -> Option<Self> {
        match raw {
            "new" => Some(FollowUpStatus::New),
            "contacted" => Some(FollowUpStatus::Contacted),
            "interested" => Some(FollowUpStatus::Interested),
            "not-interested" => Some(FollowUpStatus::NotInterested),
            "enrolled" => Some(FollowUpStatus::Enrolled),
            "closed" => Some(FollowUpStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for FollowUpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FollowUpStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FollowUpStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(Self::from_stored).unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Default,
    Info,
    Warning,
    Error,
    Success,
    Secondary,
}

impl StatusColor {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusColor::Default => "default",
            StatusColor::Info => "info",
            StatusColor::Warning => "warning",
            StatusColor::Error => "error",
            StatusColor::Success => "success",
            StatusColor::Secondary => "secondary",
        }
    }
}

pub fn status_color(status: &str) -> StatusColor {
    match status {
        "contacted" => StatusColor::Info,
        "interested" => StatusColor::Warning,
        "not-interested" => StatusColor::Error,
        "enrolled" => StatusColor::Success,
        "closed" => StatusColor::Secondary,
        _ => StatusColor::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::{status_color, FollowUpStatus, StatusColor};

    #[test]
    fn status_color_table() {
        assert_eq!(status_color("new"), StatusColor::Default);
        assert_eq!(status_color("contacted"), StatusColor::Info);
        assert_eq!(status_color("interested"), StatusColor::Warning);
        assert_eq!(status_color("not-interested"), StatusColor::Error);
        assert_eq!(status_color("enrolled"), StatusColor::Success);
        assert_eq!(status_color("closed"), StatusColor::Secondary);
        assert_eq!(status_color("unknown-value"), StatusColor::Default);
    }

    #[test]
    fn parse_normalizes_separators() {
        assert_eq!(
            FollowUpStatus::parse("Not Interested").unwrap(),
            FollowUpStatus::NotInterested
        );
        assert_eq!(
            FollowUpStatus::parse("not_interested").unwrap(),
            FollowUpStatus::NotInterested
        );
        assert!(FollowUpStatus::parse("pending").is_err());
    }

    #[test]
    fn unknown_stored_values_are_preserved() {
        let status: FollowUpStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, FollowUpStatus::Other("on-hold".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"on-hold\"");
        assert_eq!(status.color(), StatusColor::Default);
    }

    #[test]
    fn blank_or_null_status_reads_as_new() {
        let status: FollowUpStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, FollowUpStatus::New);
        let blank = FollowUpStatus::Other(String::new());
        assert!(blank.is_new());
        assert_eq!(blank.displayed(), FollowUpStatus::New);
    }
}
