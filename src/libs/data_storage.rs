//! Location of the per-user application data directory.
//!
//! The configuration file (`config.json`) lives here. The tasks file does not:
//! it defaults to `todo.txt` in the working directory so that every project
//! can keep its own list.
//!
//! ## Platform Paths
//!
//! | Platform | Directory                                |
//! |----------|------------------------------------------|
//! | Windows  | `%LOCALAPPDATA%\todo-cli`                |
//! | macOS    | `~/Library/Application Support/todo-cli` |
//! | other    | `~/.local/share/todo-cli`                |
//!
//! When the environment variable for the platform is missing, the current
//! directory is used as the base instead.

use serde::Deserialize;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "todo-cli";

/// Per-user application data directory.
#[derive(Deserialize, Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    /// Resolves the data directory for the running platform. Nothing is
    /// created on disk until [`DataStorage::get_path`] is called.
    pub fn new() -> Self {
        // Base directory from the platform's usual environment variable
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns the I/O error when the directory does not exist and cannot be
    /// created.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use todo_cli::libs::data_storage::DataStorage;
    ///
    /// let config_path = DataStorage::new().get_path("config.json")?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        // The file itself is left to the caller
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
