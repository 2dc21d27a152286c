#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleJira,

    // === QUERY MESSAGES ===
    QueryStarted(String, String, String), // user, from, to
    QueryTruncated(u32, u32),             // total, max results
    ProcessingIssues(usize),

    // === REPORT MESSAGES ===
    ActivityHeader(String, String, String), // user, from, to
    ActivityLogHeader,
    ActivityTableHeader,
    NoActivityFound,
    EventsFound(usize, usize), // events, issues

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === PROMPTS ===
    PromptConfigureJira,
    PromptJiraLogin,
    PromptJiraUrl,
    PromptJiraMaxResults,
    PromptJiraPassword(String),
}
