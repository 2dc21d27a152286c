//! Core library modules for jutrack.
//!
//! ## Features
//!
//! - **Extraction**: Reduce issue changelogs to the user's status changes
//! - **Matrix**: Group status changes into an issue-by-day grid
//! - **Views**: Chronological log and terminal table
//! - **Export**: CSV and JSON files
//! - **Infrastructure**: Configuration, data storage, messages, errors
//!
//! ## Usage
//!
//! ```rust
//! use jutrack::libs::report::ActivityReport;
//! use jutrack::libs::view::render_log;
//! use jutrack::libs::window::QueryWindow;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
//! let window = QueryWindow::new("alice", "https://jira.example.com", day, day).unwrap();
//! let report = ActivityReport::build(&[], window);
//! assert_eq!(report.matrix.day_labels(), ["01.03"]);
//! assert_eq!(render_log(&report.events, &report.window), "");
//! ```

pub mod activity;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod matrix;
pub mod messages;
pub mod report;
pub mod view;
pub mod window;
