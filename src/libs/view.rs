//! Console rendering of activity reports.
//!
//! Both views are projections of already extracted data: the log renders the
//! event list, the table renders the matrix built from that same list. Neither
//! view looks at raw issues, so they cannot disagree.

use super::activity::{sort_chronologically, ActivityEvent};
use super::formatter::{browse_url, format_timestamp};
use super::matrix::ActivityMatrix;
use super::window::QueryWindow;
use prettytable::{format, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the chronological activity log.
    pub fn log(events: &[ActivityEvent], window: &QueryWindow) {
        let log = render_log(events, window);
        if !log.is_empty() {
            println!("{}", log);
        }
    }

    /// Prints the issue-by-day table.
    pub fn matrix(matrix: &ActivityMatrix, window: &QueryWindow) {
        matrix_table(matrix, window).printstd();
    }
}

/// Renders one tab-separated line per event, oldest first.
///
/// Columns: short date-time, issue key, new status, summary, browse link.
pub fn render_log(events: &[ActivityEvent], window: &QueryWindow) -> String {
    sort_chronologically(events)
        .iter()
        .map(|event| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                format_timestamp(&event.timestamp),
                event.issue_key,
                event.change_action,
                event.summary,
                browse_url(window.jira_root_url(), &event.issue_key)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the table for a matrix: an issue column followed by one column per day.
///
/// The issue cell holds the key with its browse link on a second line.
pub fn matrix_table(matrix: &ActivityMatrix, window: &QueryWindow) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut header = vec![Cell::new("Issue")];
    header.extend(matrix.day_labels().iter().map(|label| Cell::new(label)));
    table.set_titles(Row::new(header));

    for row in matrix.rows() {
        let link = browse_url(window.jira_root_url(), row.issue_key());
        let mut cells = vec![Cell::new(&format!("{}\n{}", row.issue_key(), link))];
        cells.extend(matrix.day_labels().iter().map(|label| Cell::new(row.cell(label)).style_spec("c")));
        table.add_row(Row::new(cells));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window() -> QueryWindow {
        QueryWindow::new(
            "alice",
            "https://jira.example.com",
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn log_line_layout() {
        let events = vec![ActivityEvent {
            issue_key: "PROJ-1".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
            change_action: "In Progress".to_string(),
            summary: "Login page".to_string(),
        }];
        assert_eq!(
            render_log(&events, &window()),
            "01.03.23 09:00\tPROJ-1\tIn Progress\tLogin page\thttps://jira.example.com/browse/PROJ-1"
        );
    }

    #[test]
    fn empty_matrix_still_has_day_columns() {
        let matrix = ActivityMatrix::build(&[], &window());
        let table = matrix_table(&matrix, &window());
        assert_eq!(table.len(), 0);
        let rendered = table.to_string();
        assert!(rendered.contains("01.03"));
        assert!(rendered.contains("02.03"));
    }

    #[test]
    fn issue_row_carries_link_and_centered_marker() {
        let events = vec![ActivityEvent {
            issue_key: "PROJ-1".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
            change_action: "In Progress".to_string(),
            summary: "Login page".to_string(),
        }];
        let matrix = ActivityMatrix::build(&events, &window());
        let table = matrix_table(&matrix, &window());
        assert_eq!(table.len(), 1);

        let rendered = table.to_string();
        let key_line = rendered
            .lines()
            .find(|line| line.contains("PROJ-1") && !line.contains("browse"))
            .unwrap();
        // Marker under 01.03, nothing under 02.03.
        assert!(key_line.ends_with("│   X   │       │"), "{}", key_line);

        let link_line = rendered.lines().find(|line| line.contains("/browse/")).unwrap();
        assert!(link_line.contains("https://jira.example.com/browse/PROJ-1 │"), "{}", link_line);
        assert!(!link_line.contains('X'));
    }
}
