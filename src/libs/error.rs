//! Error types for the task list engine.
//!
//! Every variant is recoverable: the operation that produced it has left both
//! the in-memory list and the stored file untouched, and the caller can
//! report the problem and carry on.
//!
//! ## Error Classes
//!
//! [`TaskError`] mixes two kinds of failure that the command layer treats
//! differently:
//!
//! - **User errors** (`IndexOutOfRange`, `AlreadyComplete`,
//!   `InvalidPriority`, `NothingToUndo`) come from a request that cannot be
//!   applied to the current list. Commands print them and exit normally.
//! - **Environment errors** (`Decode`, `Store`) come from the tasks file or
//!   the undo history. Commands propagate them to `main`, which exits with a
//!   failure status.
//!
//! [`Message::from_task_error`](super::messages::Message::from_task_error)
//! draws this line.

use super::codec::DecodeError;
use std::io;
use std::path::PathBuf;

/// Failures of the persistence layer.
///
/// Each variant carries the path involved so messages point at the file the
/// user has to look at.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The history file exists but is not valid JSON. Delete it to start
    /// with an empty undo history.
    #[error("undo history in {path} is corrupt: {source}")]
    History {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of task list operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Index is 0 or past the end of the list. Indices are 1-based.
    #[error("invalid task number {index} (the list has {len} task(s))")]
    IndexOutOfRange { index: usize, len: usize },

    /// Completion is one-way; completing a done task changes nothing.
    #[error("task {0} is already completed")]
    AlreadyComplete(usize),

    #[error("invalid priority '{0}' (expected high, medium or low)")]
    InvalidPriority(String),

    /// History is empty, or undo is disabled with a depth of 0.
    #[error("nothing to undo")]
    NothingToUndo,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type TaskResult<T> = Result<T, TaskError>;
