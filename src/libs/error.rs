//! Domain errors raised while building an activity report.
//!
//! Command code propagates these through `anyhow::Result`; callers that need
//! to react to a specific failure can `downcast_ref::<ActivityError>()`.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ActivityError {
    /// The requested window ends before it starts.
    #[error("invalid date window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    /// The Jira search endpoint answered with a non-success status.
    #[error("Jira query failed with status {status}: {reason}")]
    QueryFailed { status: u16, reason: String },

    /// No Jira connection has been configured yet.
    #[error("Jira is not configured, run `jutrack init` first")]
    MissingConfig,

    /// No user name was given and none is configured.
    #[error("no user name given and no Jira login configured")]
    MissingUser,
}

pub type ActivityResult<T> = Result<T, ActivityError>;
