//! Jira API client.
//!
//! Runs the issue search the activity report is built from and converts the
//! wire model into [`crate::libs::activity::RawIssue`] values. Authentication
//! is HTTP basic auth with the configured login; the password comes from
//! `JUTRACK_PASSWORD` or an interactive prompt and is never stored.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jutrack::api::{Jira, JiraConfig};
//! use jutrack::libs::window::QueryWindow;
//! use chrono::NaiveDate;
//!
//! # async fn run(config: JiraConfig) -> anyhow::Result<()> {
//! let day = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
//! let window = QueryWindow::new(&config.login, &config.api_url, day, day)?;
//! let issues = Jira::new(&config).search_activity(&window).await?.into_raw_issues();
//! # Ok(())
//! # }
//! ```

pub mod jira;

pub use jira::{Jira, JiraConfig};
