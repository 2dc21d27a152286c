//! The inclusive date window an activity query runs over.

use super::error::{ActivityError, ActivityResult};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Number of days covered by the default window, today included.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Parameters of a single activity query.
///
/// Both dates are inclusive. The window is immutable once built and is
/// guaranteed to satisfy `start_date <= end_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWindow {
    user_name: String,
    jira_root_url: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl QueryWindow {
    /// Builds a window, rejecting one that ends before it starts.
    pub fn new(user_name: &str, jira_root_url: &str, start_date: NaiveDate, end_date: NaiveDate) -> ActivityResult<Self> {
        if start_date > end_date {
            return Err(ActivityError::InvalidWindow {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            user_name: user_name.to_owned(),
            jira_root_url: jira_root_url.to_owned(),
            start_date,
            end_date,
        })
    }

    /// Resolves optional CLI dates against today's date.
    ///
    /// A missing end defaults to today, a missing start to
    /// `DEFAULT_WINDOW_DAYS` days back from the end, inclusive.
    pub fn resolve_dates(from: Option<NaiveDate>, to: Option<NaiveDate>) -> (NaiveDate, NaiveDate) {
        let end = to.unwrap_or_else(|| Local::now().date_naive());
        let start = from.unwrap_or_else(|| end - Duration::days(DEFAULT_WINDOW_DAYS - 1));
        (start, end)
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn jira_root_url(&self) -> &str {
        &self.jira_root_url
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Whole days from start to end; zero for a single-day window.
    pub fn days_between(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// All calendar days of the window in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date.iter_days().take_while(move |day| *day <= self.end_date)
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let date = timestamp.date();
        date >= self.start_date && date <= self.end_date
    }
}
