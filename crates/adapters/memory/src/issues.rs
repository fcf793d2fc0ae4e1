//! Issue registry that keeps the first report of every key.

use std::sync::{Mutex, PoisonError};

use autoarea_app::ports::IssueReporter;
use autoarea_domain::issue::{Issue, IssueKey};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, warn};

/// A stored issue and when it was first reported.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueEntry {
    pub issue: Issue,
    pub created_at: DateTime<Utc>,
}

/// In-memory issue registry deduplicating by [`IssueKey`].
#[derive(Debug, Default)]
pub struct InMemoryIssueRegistry {
    issues: Mutex<IndexMap<IssueKey, IssueEntry>>,
}

impl InMemoryIssueRegistry {
    #[must_use]
    pub fn get(&self, key: &IssueKey) -> Option<IssueEntry> {
        let issues = self.issues.lock().unwrap_or_else(PoisonError::into_inner);
        issues.get(key).cloned()
    }

    /// Every stored issue, oldest first.
    #[must_use]
    pub fn issues(&self) -> Vec<IssueEntry> {
        let issues = self.issues.lock().unwrap_or_else(PoisonError::into_inner);
        issues.values().cloned().collect()
    }

    /// Drop an issue once the user has fixed it, so it can be raised again.
    pub fn dismiss(&self, key: &IssueKey) -> Option<IssueEntry> {
        let mut issues = self.issues.lock().unwrap_or_else(PoisonError::into_inner);
        issues.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IssueReporter for InMemoryIssueRegistry {
    fn create_issue(&self, issue: Issue) {
        let mut issues = self.issues.lock().unwrap_or_else(PoisonError::into_inner);
        match issues.entry(issue.key.clone()) {
            Entry::Occupied(_) => debug!(key = %issue.key, "issue already reported"),
            Entry::Vacant(slot) => {
                warn!(
                    key = %issue.key,
                    domain = %issue.domain,
                    severity = ?issue.severity,
                    "issue reported"
                );
                slot.insert(IssueEntry {
                    issue,
                    created_at: Utc::now(),
                });
            }
        }
    }
}
