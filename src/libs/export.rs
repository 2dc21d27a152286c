//! Export of activity reports to files.
//!
//! Writes the same event list and matrix the console views show, either as
//! pretty-printed JSON or as CSV with an events section followed by the
//! matrix section.

use super::activity::{sort_chronologically, ActivityEvent};
use super::formatter::{browse_url, format_timestamp};
use super::matrix::ActivityMatrix;
use super::window::QueryWindow;
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one section for events and one for the matrix.
    Csv,
    /// Pretty-printed JSON document.
    Json,
}

#[derive(Debug, Serialize)]
pub struct ExportActivity {
    pub window: ExportWindow,
    pub events: Vec<ExportEvent>,
    pub matrix: ExportMatrix,
}

#[derive(Debug, Serialize)]
pub struct ExportWindow {
    pub user: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct ExportEvent {
    pub date: String,
    pub issue: String,
    pub action: String,
    pub summary: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ExportMatrix {
    /// Day labels in column order.
    pub days: Vec<String>,
    pub rows: Vec<ExportRow>,
}

#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub issue: String,
    pub summary: String,
    pub url: String,
    pub action: String,
    /// Marked day labels in column order.
    pub days: Vec<String>,
}

impl ExportActivity {
    /// Collects the export document from extracted events and their matrix.
    pub fn new(events: &[ActivityEvent], matrix: &ActivityMatrix, window: &QueryWindow) -> Self {
        Self {
            window: ExportWindow {
                user: window.user_name().to_string(),
                from: window.start_date().format("%Y-%m-%d").to_string(),
                to: window.end_date().format("%Y-%m-%d").to_string(),
            },
            events: sort_chronologically(events)
                .into_iter()
                .map(|event| ExportEvent {
                    date: format_timestamp(&event.timestamp),
                    url: browse_url(window.jira_root_url(), &event.issue_key),
                    issue: event.issue_key,
                    action: event.change_action,
                    summary: event.summary,
                })
                .collect(),
            matrix: ExportMatrix {
                days: matrix.day_labels().to_vec(),
                rows: matrix
                    .rows()
                    .iter()
                    .map(|row| ExportRow {
                        issue: row.issue_key().to_string(),
                        summary: row.summary().to_string(),
                        url: browse_url(window.jira_root_url(), row.issue_key()),
                        action: row.action().to_string(),
                        days: matrix.day_labels().iter().filter(|label| row.is_marked(label)).cloned().collect(),
                    })
                    .collect(),
            },
        }
    }
}

pub struct DataExporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl DataExporter {
    pub fn new(format: ExportFormat, output_path: PathBuf) -> Self {
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn export(&self, activity: &ExportActivity) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(activity),
            ExportFormat::Json => self.export_json(activity),
        }
    }

    fn export_json(&self, activity: &ExportActivity) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, activity)?;
        Ok(())
    }

    /// Writes the events table, a blank record, then the matrix table.
    ///
    /// The two sections have different widths, so the writer is flexible.
    fn export_csv(&self, activity: &ExportActivity) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record(["Date", "Issue", "Action", "Summary", "Url"])?;
        for event in &activity.events {
            wtr.write_record([&event.date, &event.issue, &event.action, &event.summary, &event.url])?;
        }

        wtr.write_record([""])?;

        let mut header = vec!["Issue".to_string()];
        header.extend(activity.matrix.days.iter().cloned());
        wtr.write_record(&header)?;
        for row in &activity.matrix.rows {
            let mut record = vec![row.issue.clone()];
            record.extend(activity.matrix.days.iter().map(|day| {
                if row.days.contains(day) {
                    super::matrix::PRESENCE_MARKER.to_string()
                } else {
                    String::new()
                }
            }));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
