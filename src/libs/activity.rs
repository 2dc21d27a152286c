//! Extraction of a user's status changes from issue changelogs.
//!
//! Jira returns every issue that matched the search together with its full
//! changelog. Most of that changelog is noise for an activity report: edits to
//! other fields, transitions made by colleagues, and history from before or
//! after the requested window. This module reduces it to one
//! [`ActivityEvent`] per status transition the queried user made inside the
//! window.
//!
//! The search itself filters on `assignee was <user>`, which is a different
//! predicate than "the user changed the status". An issue can be returned
//! because the user was once its assignee while all of its transitions were
//! made by someone else; such an issue yields no events here. Both filters are
//! kept on purpose.
//!
//! ## Usage
//!
//! ```rust
//! use jutrack::libs::activity::{extract_all, RawIssue};
//! use jutrack::libs::window::QueryWindow;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 3, 3).unwrap();
//! let window = QueryWindow::new("alice", "https://jira.example.com", start, end).unwrap();
//! let issues: Vec<RawIssue> = Vec::new();
//! assert!(extract_all(&issues, &window).is_empty());
//! ```

use super::window::QueryWindow;
use chrono::NaiveDateTime;

/// Changelog field name of a workflow transition.
pub const STATUS_FIELD: &str = "status";

/// A single recorded field change on an issue.
///
/// Fields the tracker may omit are optional; entries missing a timestamp or
/// actor are skipped during extraction rather than failing the report.
#[derive(Debug, Clone, PartialEq)]
pub struct RawChangelogEntry {
    pub timestamp: Option<NaiveDateTime>,
    pub actor: Option<String>,
    pub field_name: String,
    pub field_value: Option<String>,
}

/// An issue as returned by the search, reduced to what the report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RawIssue {
    pub key: String,
    pub summary: String,
    pub entries: Vec<RawChangelogEntry>,
}

/// One status change attributable to the queried user within the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub issue_key: String,
    pub timestamp: NaiveDateTime,
    /// The status the issue was moved to.
    pub change_action: String,
    pub summary: String,
}

impl RawChangelogEntry {
    pub fn is_status_change(&self) -> bool {
        self.field_name.eq_ignore_ascii_case(STATUS_FIELD)
    }
}

/// Extracts the qualifying status changes of a single issue.
///
/// An entry qualifies when it is a status transition, its actor equals the
/// window's user name exactly, and its calendar date lies inside the window.
/// Events are returned in changelog order and are not deduplicated.
pub fn extract_events(issue: &RawIssue, window: &QueryWindow) -> Vec<ActivityEvent> {
    issue
        .entries
        .iter()
        .filter(|entry| entry.is_status_change())
        .filter_map(|entry| {
            let (Some(timestamp), Some(actor)) = (entry.timestamp, entry.actor.as_deref()) else {
                tracing::debug!(issue = %issue.key, "skipping changelog entry without timestamp or author");
                return None;
            };
            if actor != window.user_name() || !window.contains(&timestamp) {
                return None;
            }
            Some(ActivityEvent {
                issue_key: issue.key.clone(),
                timestamp,
                change_action: entry.field_value.clone().unwrap_or_default(),
                summary: issue.summary.clone(),
            })
        })
        .collect()
}

/// Extracts the qualifying status changes of every issue, in input order.
///
/// Issues without a key cannot be linked or placed in the matrix and are
/// skipped with a warning.
pub fn extract_all(issues: &[RawIssue], window: &QueryWindow) -> Vec<ActivityEvent> {
    issues
        .iter()
        .filter(|issue| {
            if issue.key.is_empty() {
                tracing::warn!(summary = %issue.summary, "skipping issue without a key");
                return false;
            }
            true
        })
        .flat_map(|issue| extract_events(issue, window))
        .collect()
}

/// Returns the events ordered by timestamp.
///
/// The sort is stable: events with equal timestamps keep their relative
/// input order.
pub fn sort_chronologically(events: &[ActivityEvent]) -> Vec<ActivityEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.timestamp);
    sorted
}
