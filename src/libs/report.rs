//! Builds the canonical data behind every activity view.

use super::activity::{extract_all, ActivityEvent, RawIssue};
use super::matrix::ActivityMatrix;
use super::window::QueryWindow;

/// Extracted events and the matrix derived from them, for one window.
///
/// The log, the table and the exporter all read from this value.
#[derive(Debug, Clone)]
pub struct ActivityReport {
    pub window: QueryWindow,
    pub events: Vec<ActivityEvent>,
    pub matrix: ActivityMatrix,
}

impl ActivityReport {
    pub fn build(issues: &[RawIssue], window: QueryWindow) -> Self {
        let events = extract_all(issues, &window);
        let matrix = ActivityMatrix::build(&events, &window);
        tracing::debug!(
            issues = issues.len(),
            events = events.len(),
            rows = matrix.rows().len(),
            "activity report built"
        );
        Self { window, events, matrix }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
