//! Persistence for the task list.
//!
//! The engine only ever reads the whole list and writes the whole list back,
//! so a store is a pair of "read all lines" / "replace all lines" operations
//! plus the same pair for the undo history.
//!
//! Two implementations are provided:
//! - [`FileStore`] keeps one encoded task per line in a UTF-8 text file and
//!   the undo history in a sibling JSON file (`todo.txt` →
//!   `todo.history.json`).
//! - [`MemoryStore`] keeps everything in memory, for tests and dry runs.
//!
//! Stores assume a single process owns the files; there is no locking.

use super::error::StoreError;
use super::history::History;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait Store {
    /// All stored lines in order, without line terminators. Empty when
    /// nothing has been stored yet.
    fn read_all(&self) -> Result<Vec<String>, StoreError>;

    /// Replaces the stored lines.
    fn write_all(&mut self, lines: &[String]) -> Result<(), StoreError>;

    fn read_history(&self) -> Result<Option<History>, StoreError>;

    fn write_history(&mut self, history: &History) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    history_path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let history_path = path.with_extension("history.json");
        FileStore { path, history_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    fn write_file(path: &Path, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, contents).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Store for FileStore {
    fn read_all(&self) -> Result<Vec<String>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "task file does not exist yet");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let lines: Vec<String> = contents.lines().map(str::to_string).collect();
        debug!(path = %self.path.display(), lines = lines.len(), "read task file");
        Ok(lines)
    }

    fn write_all(&mut self, lines: &[String]) -> Result<(), StoreError> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        Self::write_file(&self.path, &contents)?;
        debug!(path = %self.path.display(), lines = lines.len(), "wrote task file");
        Ok(())
    }

    fn read_history(&self) -> Result<Option<History>, StoreError> {
        if !self.history_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.history_path).map_err(|source| StoreError::Read {
            path: self.history_path.clone(),
            source,
        })?;
        let history = serde_json::from_str(&contents).map_err(|source| StoreError::History {
            path: self.history_path.clone(),
            source,
        })?;
        Ok(Some(history))
    }

    fn write_history(&mut self, history: &History) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(history).map_err(|source| StoreError::History {
            path: self.history_path.clone(),
            source,
        })?;
        Self::write_file(&self.history_path, &contents)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lines: Vec<String>,
    history: Option<History>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        MemoryStore {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of successful `write_all` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Store for MemoryStore {
    fn read_all(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lines.clone())
    }

    fn write_all(&mut self, lines: &[String]) -> Result<(), StoreError> {
        self.lines = lines.to_vec();
        self.writes += 1;
        Ok(())
    }

    fn read_history(&self) -> Result<Option<History>, StoreError> {
        Ok(self.history.clone())
    }

    fn write_history(&mut self, history: &History) -> Result<(), StoreError> {
        self.history = Some(history.clone());
        Ok(())
    }
}
