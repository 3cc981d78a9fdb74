//! Issue creation for broken-link reports

mod issue;

pub use issue::{GitHubIssues, IssueTracker, ISSUE_LABELS};
