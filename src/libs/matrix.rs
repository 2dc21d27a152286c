//! The issue-by-day activity matrix.
//!
//! Each row stands for one issue with at least one qualifying status change,
//! each column for one calendar day of the window. A cell is marked when the
//! issue changed status on that day. Rows are keyed and ordered by issue key,
//! so the matrix is the same whatever order the events arrive in.

use super::activity::ActivityEvent;
use super::formatter::day_label;
use super::window::QueryWindow;
use std::collections::{BTreeMap, BTreeSet};

/// Cell content for a day with activity.
pub const PRESENCE_MARKER: &str = "X";

/// One issue's row in the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    issue_key: String,
    summary: String,
    action: String,
    days: BTreeSet<String>,
}

impl ActivityRow {
    fn new(event: &ActivityEvent) -> Self {
        Self {
            issue_key: event.issue_key.clone(),
            summary: event.summary.clone(),
            action: event.change_action.clone(),
            days: BTreeSet::new(),
        }
    }

    /// Marks a day label. Marking an already marked day changes nothing.
    fn mark_day(&mut self, label: String) {
        self.days.insert(label);
    }

    pub fn issue_key(&self) -> &str {
        &self.issue_key
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The status of the issue's latest qualifying change.
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn is_marked(&self, label: &str) -> bool {
        self.days.contains(label)
    }

    /// Cell value for a day column: the presence marker or an empty string.
    pub fn cell(&self, label: &str) -> &'static str {
        if self.is_marked(label) {
            PRESENCE_MARKER
        } else {
            ""
        }
    }
}

/// Issue-by-day presence grid for one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityMatrix {
    day_labels: Vec<String>,
    rows: Vec<ActivityRow>,
}

impl ActivityMatrix {
    /// Builds the matrix in a single pass over the events.
    ///
    /// Day columns are generated from the window even when there are no
    /// events. Events are expected to lie inside the window, as produced by
    /// [`super::activity::extract_all`]; a stray event outside it is dropped
    /// so that rows never carry labels without a column.
    pub fn build(events: &[ActivityEvent], window: &QueryWindow) -> Self {
        let day_labels = day_labels(window);
        let mut rows: BTreeMap<String, (ActivityRow, chrono::NaiveDateTime)> = BTreeMap::new();

        for event in events.iter().filter(|event| window.contains(&event.timestamp)) {
            let (row, latest) = rows
                .entry(event.issue_key.clone())
                .or_insert_with(|| (ActivityRow::new(event), event.timestamp));
            if event.timestamp >= *latest {
                row.action = event.change_action.clone();
                *latest = event.timestamp;
            }
            row.mark_day(day_label(&event.timestamp.date()));
        }

        Self {
            day_labels,
            rows: rows.into_values().map(|(row, _)| row).collect(),
        }
    }

    pub fn day_labels(&self) -> &[String] {
        &self.day_labels
    }

    /// Rows ordered by issue key.
    pub fn rows(&self) -> &[ActivityRow] {
        &self.rows
    }

    pub fn row(&self, issue_key: &str) -> Option<&ActivityRow> {
        self.rows
            .binary_search_by(|row| row.issue_key.as_str().cmp(issue_key))
            .ok()
            .map(|index| &self.rows[index])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One label per calendar day of the window, in chronological order.
pub fn day_labels(window: &QueryWindow) -> Vec<String> {
    window.days().map(|day| day_label(&day)).collect()
}
