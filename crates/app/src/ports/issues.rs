//! Issue port — the host's issue registry.

use std::sync::Arc;

use autoarea_domain::issue::Issue;

/// Sink for configuration issues.
///
/// Implementations must deduplicate by [`Issue::key`]: reporting an issue
/// whose key is already known must not create a second one.
pub trait IssueReporter {
    fn create_issue(&self, issue: Issue);
}

impl<T: IssueReporter + ?Sized> IssueReporter for Arc<T> {
    fn create_issue(&self, issue: Issue) {
        (**self).create_issue(issue);
    }
}
