#[cfg(test)]
mod tests {
    use jutrack::api::jira::JiraConfig;
    use jutrack::libs::config::{Config, CONFIG_FILE_NAME};
    use jutrack::libs::data_storage::DATA_DIR_ENV;
    use serial_test::serial;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a fresh temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        jira: JiraConfig,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var(DATA_DIR_ENV, temp_dir.path());
            ConfigTestContext {
                temp_dir,
                jira: JiraConfig {
                    login: "alice".to_string(),
                    api_url: "https://jira.example.com".to_string(),
                    max_results: Some(200),
                },
            }
        }

        fn teardown(self) {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.jira.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            jira: Some(ctx.jira.clone()),
        };
        config.save().unwrap();

        assert!(ctx.temp_dir.path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(Config::read().unwrap().jira, Some(ctx.jira.clone()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_max_results_is_optional(ctx: &mut ConfigTestContext) {
        std::fs::write(
            ctx.temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ "jira": { "login": "bob", "api_url": "https://jira.example.com" } }"#,
        )
        .unwrap();

        let jira = Config::read().unwrap().jira.unwrap();
        assert_eq!(jira.login, "bob");
        assert_eq!(jira.max_results, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_corrupted_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.temp_dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    #[serial]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config {
            jira: Some(ctx.jira.clone()),
        }
        .save()
        .unwrap();

        assert!(Config::delete().unwrap());
        assert!(!ctx.temp_dir.path().join(CONFIG_FILE_NAME).exists());
    }
}
