//! Whole-store JSON snapshots in the shape of a browser local-storage dump:
//! `{"inquiries": [...], "followUps": [...]}`.

use crate::error::{Result, StoreError};
use intake_core::domain::{FollowUp, Inquiry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
    #[serde(default)]
    pub follow_ups: Vec<FollowUp>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub inquiries_added: usize,
    pub inquiries_skipped: usize,
    pub inquiries_invalid: usize,
    pub follow_ups_added: usize,
    pub follow_ups_skipped: usize,
    pub follow_ups_invalid: usize,
}

impl Snapshot {
    pub fn read_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
            key: "snapshot",
            source,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(StoreError::Encode)
    }
}
