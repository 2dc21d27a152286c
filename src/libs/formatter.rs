//! Date and link formatting shared by every report view.
//!
//! The matrix table matches a row's day markers to its columns by string
//! label, so the label format used for markers and for column headers must be
//! the same. Both go through [`day_label`].
//!
//! ## Format Specifications
//!
//! - Day label: `dd.MM`, e.g. `01.03` for March 1st
//! - Log timestamp: `dd.MM.yy HH:mm`, e.g. `01.03.23 09:00`
//! - Browse link: `{jira root}/browse/{issue key}`
//!
//! ## Examples
//!
//! ```rust
//! use jutrack::libs::formatter::{browse_url, day_label};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
//! assert_eq!(day_label(&date), "01.03");
//! assert_eq!(browse_url("https://jira.example.com/", "PROJ-1"), "https://jira.example.com/browse/PROJ-1");
//! ```

use chrono::{NaiveDate, NaiveDateTime};

/// Pattern for matrix column headers and row markers.
pub const DAY_LABEL_FORMAT: &str = "%d.%m";

/// Pattern for the short date-time shown in the text log.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%y %H:%M";

/// Formats a calendar day as its fixed-width matrix label.
pub fn day_label(date: &NaiveDate) -> String {
    date.format(DAY_LABEL_FORMAT).to_string()
}

/// Formats an event timestamp for the text log.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the link to an issue in the Jira web UI.
///
/// A trailing slash on the configured root is tolerated so that
/// `https://jira/` and `https://jira` produce the same link.
pub fn browse_url(jira_root_url: &str, issue_key: &str) -> String {
    format!("{}/browse/{}", jira_root_url.trim_end_matches('/'), issue_key)
}
