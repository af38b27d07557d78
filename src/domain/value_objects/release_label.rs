//! Release label value object - the timestamp a promoted release is named after

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// `YYYYMMDDHHMMSS`
pub const RELEASE_LABEL_FORMAT: &str = "%Y%m%d%H%M%S";

/// Name of a promoted release directory under `releases/`.
///
/// Always 14 ASCII digits, so labels sort in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseLabel(String);

impl ReleaseLabel {
    /// Label for a wall-clock time. Sub-second precision is dropped.
    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(at.format(RELEASE_LABEL_FORMAT).to_string())
    }

    /// Parse an existing label, accepting only the fixed-width digit form.
    pub fn parse(label: &str) -> Option<Self> {
        if label.len() != 14 || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        NaiveDateTime::parse_from_str(label, RELEASE_LABEL_FORMAT)
            .ok()
            .map(|_| Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReleaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
