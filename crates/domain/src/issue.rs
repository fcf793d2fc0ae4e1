//! Issue — a host-surfaced notification about a configuration problem.
//!
//! Issues are deduplicated by [`IssueKey`]: reporting the same key twice
//! must never produce a second issue. Building the key deterministically is
//! the core's half of that contract; the reporter enforces the other half.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue type raised when an area identifier does not resolve.
pub const ISSUE_TYPE_INVALID_AREA: &str = "invalid-area";

/// How urgently the host should surface an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    Error,
    Warning,
}

/// Deduplication key, rendered as `<issue type>_<subject>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueKey(String);

impl IssueKey {
    #[must_use]
    pub fn new(issue_type: &str, subject: &str) -> Self {
        Self(format!("{issue_type}_{subject}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single issue as handed to the host's issue registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Owning integration domain.
    pub domain: String,
    pub key: IssueKey,
    pub is_fixable: bool,
    pub severity: IssueSeverity,
    pub translation_key: String,
    pub data: serde_json::Map<String, serde_json::Value>,
}
