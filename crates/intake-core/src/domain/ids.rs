use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// Ids are opaque strings: records imported from older dumps carry
// millisecond tokens rather than uuids.
macro_rules! id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl Default for $name {
            fn default() -> Self {
                Self::generate()
            }
        }

        impl $name {
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Only reachable through deserialization; parsing rejects it.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::InvalidId);
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

id_type!(InquiryId);
id_type!(FollowUpId);

#[cfg(test)]
mod tests {
    use super::{FollowUpId, InquiryId};
    use crate::error::CoreError;
    use std::str::FromStr;

    #[test]
    fn generated_ids_differ() {
        assert_ne!(InquiryId::generate(), InquiryId::generate());
        assert_ne!(FollowUpId::generate(), FollowUpId::generate());
    }

    #[test]
    fn parse_accepts_legacy_tokens() {
        let id = InquiryId::from_str(" 1704103200000 ").unwrap();
        assert_eq!(id.as_str(), "1704103200000");
    }

    #[test]
    fn parse_rejects_blank() {
        assert_eq!(FollowUpId::from_str("  ").unwrap_err(), CoreError::InvalidId);
    }
}
