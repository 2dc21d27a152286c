//! Jira activity command.
//!
//! Queries the configured Jira instance for the status changes a user made in
//! a date range and prints them as a chronological log, an issue-by-day
//! table, or both.

use crate::{
    api::Jira,
    libs::{
        config::Config,
        error::ActivityError,
        messages::Message,
        report::ActivityReport,
        view::View,
        window::QueryWindow,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};

/// Date range and user shared by every command that queries Jira.
#[derive(Debug, Clone, Args)]
pub struct WindowArgs {
    /// First day of the range (YYYY-MM-DD), defaults to six days before --to
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Jira user whose status changes are collected, defaults to the configured login
    #[arg(short, long)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivityView {
    /// Chronological list of status changes
    Log,
    /// Issue-by-day table
    Table,
    /// Log followed by the table
    Both,
}

#[derive(Debug, Args)]
pub struct ActivityArgs {
    #[command(flatten)]
    window: WindowArgs,

    /// Which view to print
    #[arg(short, long, value_enum, default_value = "both")]
    view: ActivityView,
}

/// Resolves the window from arguments and configuration, then queries Jira.
///
/// # Errors
///
/// Fails when Jira is not configured, no user can be determined, the range
/// is reversed, or the query itself fails.
pub async fn fetch_report(args: &WindowArgs) -> Result<ActivityReport> {
    let config = Config::read()?;
    let jira_config = config.jira.ok_or(ActivityError::MissingConfig)?;

    let user = args
        .user
        .clone()
        .or_else(|| (!jira_config.login.is_empty()).then(|| jira_config.login.clone()))
        .ok_or(ActivityError::MissingUser)?;

    let (from, to) = QueryWindow::resolve_dates(args.from, args.to);
    let window = QueryWindow::new(&user, &jira_config.api_url, from, to)?;

    msg_print!(Message::QueryStarted(user, from.to_string(), to.to_string()));
    let issues = Jira::new(&jira_config).search_activity(&window).await?.into_raw_issues();

    Ok(ActivityReport::build(&issues, window))
}

pub async fn cmd(args: ActivityArgs) -> Result<()> {
    let report = fetch_report(&args.window).await?;
    let window = &report.window;

    msg_print!(
        Message::ActivityHeader(
            window.user_name().to_string(),
            window.start_date().to_string(),
            window.end_date().to_string()
        ),
        true
    );

    if report.is_empty() {
        msg_info!(Message::NoActivityFound);
    } else {
        msg_print!(Message::EventsFound(report.events.len(), report.matrix.rows().len()));
    }

    if matches!(args.view, ActivityView::Log | ActivityView::Both) && !report.is_empty() {
        msg_print!(Message::ActivityLogHeader, true);
        View::log(&report.events, window);
    }

    if matches!(args.view, ActivityView::Table | ActivityView::Both) {
        msg_print!(Message::ActivityTableHeader, true);
        View::matrix(&report.matrix, window);
    }

    Ok(())
}
