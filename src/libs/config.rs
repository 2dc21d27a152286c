//! Configuration management for jutrack.
//!
//! The configuration holds the Jira connection the activity queries run
//! against. It is stored as pretty-printed JSON in the platform data
//! directory and can be edited by hand or through the interactive wizard
//! started by `jutrack init`.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\ibiber\jutrack\config.json`
//! - **macOS**: `~/Library/Application Support/ibiber/jutrack/config.json`
//! - **Linux**: `~/.local/share/ibiber/jutrack/config.json`
//!
//! `JUTRACK_DATA_DIR` replaces the directory on every platform.
//!
//! Passwords are never written to the configuration file. They are read from
//! `JUTRACK_PASSWORD` or prompted for on each run.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use jutrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(jira) = &config.jira {
//!     println!("Jira URL: {}", jira.api_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root configuration object.
///
/// Unconfigured sections are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Jira instance the activity is read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, starting from the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let configure_jira = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfigureJira.to_string())
            .default(true)
            .interact()?;

        if configure_jira {
            msg_print!(Message::ConfigModuleJira);
            config.jira = Some(JiraConfig::init(&config.jira)?);
        }

        Ok(config)
    }
}
