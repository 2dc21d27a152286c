//! Display implementation for jutrack messages.
//!
//! Keeps every piece of user-facing text in one place. Messages with dynamic
//! content interpolate their typed parameters here.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration to delete".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),

            // === QUERY MESSAGES ===
            Message::QueryStarted(user, from, to) => format!("Querying Jira activity of {} from {} to {}", user, from, to),
            Message::QueryTruncated(total, max) => format!(
                "The query returned {} results and only the first {} results are considered",
                total, max
            ),
            Message::ProcessingIssues(count) => format!("Processing {} issues", count),

            // === REPORT MESSAGES ===
            Message::ActivityHeader(user, from, to) => format!("Activity of {} from {} to {}", user, from, to),
            Message::ActivityLogHeader => "Status changes:".to_string(),
            Message::ActivityTableHeader => "Issues by day:".to_string(),
            Message::NoActivityFound => "No status changes found in this period".to_string(),
            Message::EventsFound(events, issues) => format!("{} status changes on {} issues", events, issues),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Activity exported to: {}", path),

            // === PROMPTS ===
            Message::PromptConfigureJira => "Configure the Jira connection?".to_string(),
            Message::PromptJiraLogin => "Enter your Jira login".to_string(),
            Message::PromptJiraUrl => "Enter the Jira URL".to_string(),
            Message::PromptJiraMaxResults => "Maximum number of issues per query (0 = server default)".to_string(),
            Message::PromptJiraPassword(login) => format!("Enter the Jira password for {}", login),
        };
        write!(f, "{}", text)
    }
}
