use crate::libs::activity::{RawChangelogEntry, RawIssue};
use crate::libs::error::ActivityError;
use crate::libs::messages::Message;
use crate::libs::window::QueryWindow;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::{DateTime, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Input, Password};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

const SEARCH_URL: &str = "rest/api/2/search";
const SEARCH_FIELDS: &str = "key,summary";
const SEARCH_EXPAND: &str = "changelog";
const JQL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable holding the Jira password for non-interactive runs.
pub const PASSWORD_ENV: &str = "JUTRACK_PASSWORD";

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResults {
    #[serde(default)]
    pub total: u32,
    /// Page size the server applied; absent on some deployments.
    #[serde(default)]
    pub max_results: Option<u32>,
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Deserialize, Debug)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub fields: JiraIssueFields,
    #[serde(default)]
    pub changelog: JiraChangelog,
}

#[derive(Deserialize, Debug, Default)]
pub struct JiraIssueFields {
    pub summary: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct JiraChangelog {
    #[serde(default)]
    pub histories: Vec<JiraHistory>,
}

/// One changelog history: a set of field changes made together.
#[derive(Deserialize, Debug)]
pub struct JiraHistory {
    pub author: Option<JiraUser>,
    pub created: Option<String>,
    #[serde(default)]
    pub items: Vec<JiraHistoryItem>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct JiraHistoryItem {
    #[serde(default)]
    pub field: String,
    #[serde(rename = "toString")]
    pub to_value: Option<String>,
}

impl JiraSearchResults {
    /// Whether the server capped the result list.
    pub fn is_truncated(&self) -> bool {
        self.max_results.is_some_and(|max| self.total > max)
    }

    pub fn into_raw_issues(self) -> Vec<RawIssue> {
        self.issues.into_iter().map(RawIssue::from).collect()
    }
}

impl JiraUser {
    /// Server installations report the login as `name`; Jira Cloud only has a display name.
    fn login(&self) -> Option<String> {
        self.name.clone().or_else(|| self.display_name.clone())
    }
}

impl From<JiraIssue> for RawIssue {
    fn from(issue: JiraIssue) -> Self {
        let entries = issue
            .changelog
            .histories
            .iter()
            .flat_map(|history| {
                let timestamp = history.created.as_deref().and_then(parse_jira_timestamp);
                let actor = history.author.as_ref().and_then(JiraUser::login);
                history.items.iter().map(move |item| RawChangelogEntry {
                    timestamp,
                    actor: actor.clone(),
                    field_name: item.field.clone(),
                    field_value: item.to_value.clone(),
                })
            })
            .collect();

        RawIssue {
            key: issue.key,
            summary: issue.fields.summary.unwrap_or_default(),
            entries,
        }
    }
}

/// Parses a Jira changelog timestamp such as `2023-03-01T09:00:00.000+0100`.
///
/// The wall-clock time in the reported offset is kept. Returns `None` for
/// values that cannot be parsed.
pub fn parse_jira_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|timestamp| timestamp.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Builds the JQL selecting the issues a user may have worked on in the window.
///
/// `assignee was` matches on assignment history, not on who made a change.
/// The changelog is filtered by actor afterwards.
pub fn activity_jql(window: &QueryWindow) -> String {
    format!(
        "assignee was \"{}\" AND status changed during (\"{}\",\"{}\")",
        window.user_name(),
        window.start_date().format(JQL_DATE_FORMAT),
        window.end_date().format(JQL_DATE_FORMAT)
    )
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: JiraConfig,
    password: Option<String>,
}

impl Jira {
    pub fn new(config: &JiraConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_owned());
        self
    }

    fn password(&self) -> Result<String> {
        if let Some(password) = &self.password {
            return Ok(password.clone());
        }
        if let Ok(password) = env::var(PASSWORD_ENV) {
            return Ok(password);
        }
        Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraPassword(self.config.login.clone()).to_string())
            .interact()?)
    }

    /// Query parameters of the activity search.
    pub fn search_params(&self, window: &QueryWindow) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("jql", activity_jql(window)),
            ("fields", SEARCH_FIELDS.to_string()),
            ("expand", SEARCH_EXPAND.to_string()),
        ];
        if let Some(max_results) = self.config.max_results.filter(|max| *max > 0) {
            params.push(("maxResults", max_results.to_string()));
        }
        params
    }

    /// Runs the activity search for a window.
    ///
    /// Only the first page is fetched. A truncated result is reported as a
    /// warning and returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::QueryFailed`] for a non-success status, or the
    /// transport / decoding error.
    pub async fn search_activity(&self, window: &QueryWindow) -> Result<JiraSearchResults> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), SEARCH_URL);
        let params = self.search_params(window);
        msg_debug!("Query: {} {:?}", url, params);

        let res = self
            .client
            .get(&url)
            .basic_auth(&self.config.login, Some(self.password()?))
            .query(&params)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Jira query returned an error");
            return Err(ActivityError::QueryFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            }
            .into());
        }
        tracing::info!("Jira query successful");

        let results = res.json::<JiraSearchResults>().await?;
        if let Some(max_results) = results.max_results.filter(|_| results.is_truncated()) {
            msg_warning!(Message::QueryTruncated(results.total, max_results));
        }
        tracing::info!("{}", Message::ProcessingIssues(results.issues.len()));

        Ok(results)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    pub login: String,
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl JiraConfig {
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            login: "".to_string(),
            api_url: "".to_string(),
            max_results: None,
        });
        let max_results: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraMaxResults.to_string())
            .default(config.max_results.unwrap_or(0))
            .interact_text()?;
        Ok(Self {
            login: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraLogin.to_string())
                .default(config.login)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJiraUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            max_results: (max_results > 0).then_some(max_results),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_jira_offset_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_jira_timestamp("2023-03-01T09:00:00.000+0100"), Some(expected));
        assert_eq!(parse_jira_timestamp("2023-03-01T09:00:00+01:00"), Some(expected));
        assert_eq!(parse_jira_timestamp("2023-03-01T09:00:00"), Some(expected));
        assert_eq!(parse_jira_timestamp("yesterday"), None);
    }

    #[test]
    fn jql_uses_iso_dates() {
        let window = QueryWindow::new(
            "alice",
            "https://jira.example.com",
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 3).unwrap(),
        )
        .unwrap();
        assert_eq!(
            activity_jql(&window),
            "assignee was \"alice\" AND status changed during (\"2023-03-01\",\"2023-03-03\")"
        );
    }

    #[test]
    fn jql_quotes_display_names() {
        let window = QueryWindow::new(
            "Alice Smith",
            "https://jira.example.com",
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        )
        .unwrap();
        assert!(activity_jql(&window).starts_with("assignee was \"Alice Smith\" AND "));
    }

    #[test]
    fn missing_max_results_is_not_truncation() {
        let results: JiraSearchResults = serde_json::from_str(r#"{"total": 1, "issues": []}"#).unwrap();
        assert_eq!(results.max_results, None);
        assert!(!results.is_truncated());
    }

    #[test]
    fn total_above_max_results_is_truncation() {
        let capped: JiraSearchResults = serde_json::from_str(r#"{"total": 120, "maxResults": 50, "issues": []}"#).unwrap();
        assert!(capped.is_truncated());
        let complete: JiraSearchResults = serde_json::from_str(r#"{"total": 50, "maxResults": 50, "issues": []}"#).unwrap();
        assert!(!complete.is_truncated());
    }
}
