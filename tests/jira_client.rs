#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use jutrack::api::jira::{Jira, JiraConfig, JiraSearchResults};
    use jutrack::libs::error::ActivityError;
    use jutrack::libs::report::ActivityReport;
    use jutrack::libs::window::QueryWindow;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> JiraConfig {
        JiraConfig {
            login: "alice".to_string(),
            api_url: server.uri(),
            max_results: Some(50),
        }
    }

    fn window(server: &MockServer) -> QueryWindow {
        QueryWindow::new(
            "alice",
            &server.uri(),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 3).unwrap(),
        )
        .unwrap()
    }

    fn search_response() -> serde_json::Value {
        json!({
            "startAt": 0,
            "maxResults": 2,
            "total": 3,
            "issues": [
                {
                    "id": "10001",
                    "key": "PROJ-1",
                    "fields": { "summary": "Login page" },
                    "changelog": {
                        "histories": [
                            {
                                "author": { "name": "alice", "displayName": "Alice A." },
                                "created": "2023-03-01T09:00:00.000+0100",
                                "items": [
                                    { "field": "status", "fromString": "Open", "toString": "In Progress" },
                                    { "field": "assignee", "fromString": null, "toString": "alice" }
                                ]
                            },
                            {
                                "author": { "name": "bob" },
                                "created": "2023-03-02T10:00:00.000+0100",
                                "items": [ { "field": "status", "toString": "Done" } ]
                            },
                            {
                                "created": "2023-03-02T11:00:00.000+0100",
                                "items": [ { "field": "status", "toString": "Reopened" } ]
                            }
                        ]
                    }
                },
                {
                    "id": "10002",
                    "key": "PROJ-2",
                    "fields": { "summary": null },
                    "changelog": {
                        "histories": [
                            {
                                "author": { "displayName": "alice" },
                                "created": "not a date",
                                "items": [ { "field": "status", "toString": "Done" } ]
                            }
                        ]
                    }
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_search_sends_jql_and_basic_auth() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/search"))
            .and(query_param(
                "jql",
                "assignee was \"alice\" AND status changed during (\"2023-03-01\",\"2023-03-03\")",
            ))
            .and(query_param("fields", "key,summary"))
            .and(query_param("expand", "changelog"))
            .and(query_param("maxResults", "50"))
            // base64("alice:secret")
            .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
            .expect(1)
            .mount(&server)
            .await;

        let jira = Jira::new(&config(&server)).with_password("secret");
        let results = jira.search_activity(&window(&server)).await.unwrap();

        assert_eq!(results.total, 3);
        assert_eq!(results.max_results, Some(2));
        assert!(results.is_truncated());
        assert_eq!(results.issues.len(), 2);
    }

    #[tokio::test]
    async fn test_search_error_status_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/search"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let jira = Jira::new(&config(&server)).with_password("wrong");
        let err = jira.search_activity(&window(&server)).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<ActivityError>(),
            Some(&ActivityError::QueryFailed {
                status: 401,
                reason: "Unauthorized".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_search_without_page_size_is_complete() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 1, "issues": [] })))
            .mount(&server)
            .await;

        let jira = Jira::new(&config(&server)).with_password("secret");
        let results = jira.search_activity(&window(&server)).await.unwrap();

        assert_eq!(results.total, 1);
        assert_eq!(results.max_results, None);
        assert!(!results.is_truncated());
    }

    #[tokio::test]
    async fn test_search_rejects_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let jira = Jira::new(&config(&server)).with_password("secret");
        assert!(jira.search_activity(&window(&server)).await.is_err());
    }

    #[test]
    fn test_wire_model_converts_to_raw_issues() {
        let results: JiraSearchResults = serde_json::from_value(search_response()).unwrap();
        let issues = results.into_raw_issues();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].key, "PROJ-1");
        assert_eq!(issues[0].summary, "Login page");
        // one entry per history item
        assert_eq!(issues[0].entries.len(), 4);
        assert_eq!(issues[0].entries[1].field_name, "assignee");
        assert_eq!(issues[0].entries[1].actor.as_deref(), Some("alice"));
        assert_eq!(issues[0].entries[3].actor, None);

        assert_eq!(issues[1].summary, "");
        assert_eq!(issues[1].entries[0].actor.as_deref(), Some("alice"));
        assert_eq!(issues[1].entries[0].timestamp, None);
    }

    #[tokio::test]
    async fn test_search_results_feed_the_report() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/2/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
            .mount(&server)
            .await;

        let jira = Jira::new(&config(&server)).with_password("secret");
        let issues = jira.search_activity(&window(&server)).await.unwrap().into_raw_issues();
        let report = ActivityReport::build(&issues, window(&server));

        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].change_action, "In Progress");
        assert_eq!(report.matrix.rows().len(), 1);
        assert!(report.matrix.rows()[0].is_marked("01.03"));
    }
}
