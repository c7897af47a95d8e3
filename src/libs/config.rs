//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! per-user data directory (see [`DataStorage`]). A missing file means every
//! setting takes its default, and missing fields in an existing file do too,
//! so the tool works without running `todo init` first.
//!
//! ```json
//! {
//!   "tasks_file": "todo.txt",
//!   "history_depth": 1,
//!   "default_priority": "medium",
//!   "confirm_clear": true
//! }
//! ```
//!
//! The `TODO_FILE` environment variable, when set, takes precedence over
//! `tasks_file`.

use super::data_storage::DataStorage;
use super::history::DEFAULT_HISTORY_DEPTH;
use super::messages::Message;
use super::store::FileStore;
use super::task::Priority;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TASKS_FILE: &str = "todo.txt";
pub const TASKS_FILE_ENV: &str = "TODO_FILE";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Relative paths are resolved against the working directory.
    pub tasks_file: PathBuf,

    /// Number of changes `todo undo` can revert. 0 disables undo.
    pub history_depth: usize,

    pub default_priority: Priority,

    pub confirm_clear: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            history_depth: DEFAULT_HISTORY_DEPTH,
            default_priority: Priority::default(),
            confirm_clear: true,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Reads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError.to_string())?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Tasks file in effect, honouring `TODO_FILE`.
    pub fn tasks_file(&self) -> PathBuf {
        match env::var_os(TASKS_FILE_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.tasks_file.clone(),
        }
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.tasks_file())
    }

    /// Interactive setup wizard, pre-filled with the current settings.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let tasks_file: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(current.tasks_file.display().to_string())
            .interact_text()?;

        let history_depth: usize = Input::with_theme(&theme)
            .with_prompt(Message::PromptHistoryDepth.to_string())
            .default(current.history_depth)
            .interact_text()?;

        let levels: Vec<&str> = Priority::ALL.iter().map(|p| p.name()).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&levels)
            .default(Priority::ALL.iter().position(|p| *p == current.default_priority).unwrap_or(1))
            .interact()?;

        let confirm_clear = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptConfirmClear.to_string())
            .default(current.confirm_clear)
            .interact()?;

        Ok(Config {
            tasks_file: PathBuf::from(tasks_file),
            history_depth,
            default_priority: Priority::ALL[selected],
            confirm_clear,
        })
    }
}
