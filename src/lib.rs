//! # jutrack - Jira User Tracking
//!
//! A command-line utility that collects the status changes a user made in
//! Jira over a date range and shows them as a chronological log and an
//! issue-by-day table.
//!
//! ## Features
//!
//! - **Activity Extraction**: Reduce issue changelogs to the user's own status changes
//! - **Activity Matrix**: See at a glance which issues moved on which day
//! - **Export**: Write the log and the matrix to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jutrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
