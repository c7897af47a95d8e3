//! The task list engine.
//!
//! [`TodoList`] owns the decoded tasks of one store and applies the list
//! operations to them. Each mutating operation follows the same sequence:
//!
//! 1. validate the request and apply it to a working copy of the list
//! 2. encode the working copy and write it to the store
//! 3. make the working copy the current list
//! 4. record the previous list in the undo history and persist the history
//!
//! A failure in steps 1 or 2 leaves everything untouched, so callers can
//! report the error and keep going. Once the tasks file is written the
//! operation counts as done: a failure to persist the history in step 4 is
//! logged as a warning and not returned.
//!
//! Tasks are addressed by 1-based position. Positions are recomputed by every
//! operation that removes or reorders tasks (delete, sort, clear, undo);
//! callers must look a task up again after such an operation.
//!
//! ## Usage
//!
//! ```rust
//! use todo_cli::libs::store::MemoryStore;
//! use todo_cli::libs::task::{NewTask, Priority};
//! use todo_cli::libs::todo_list::TodoList;
//!
//! let mut list = TodoList::open(MemoryStore::new())?;
//! let index = list.add(NewTask { priority: Some(Priority::High), ..NewTask::new("buy milk") })?;
//! list.complete(index)?;
//! assert_eq!(list.lines(), vec!["[x] 🔥 buy milk".to_string()]);
//! # Ok::<(), todo_cli::libs::error::TaskError>(())
//! ```

use super::codec::{self, DecodeError, DATE_FORMAT};
use super::error::{TaskError, TaskResult};
use super::export::ExportRow;
use super::history::{History, Snapshot};
use super::store::Store;
use super::task::{NewTask, Priority, Status, Task};
use tracing::{debug, warn};

/// Parses a priority level name (`high`, `medium`, `low`).
pub fn parse_priority(level: &str) -> TaskResult<Priority> {
    level.parse().map_err(|_| TaskError::InvalidPriority(level.to_string()))
}

pub struct TodoList<S: Store> {
    store: S,
    tasks: Vec<Task>,
    history: History,
    default_priority: Priority,
}

impl<S: Store> TodoList<S> {
    /// Loads every task from `store`. Blank lines are skipped.
    pub fn open(store: S) -> TaskResult<Self> {
        let mut tasks = Vec::new();
        for (number, line) in store.read_all()?.iter().enumerate() {
            match codec::decode(line) {
                Ok(task) => tasks.push(task),
                Err(DecodeError::EmptyLine) => debug!(line = number + 1, "skipping blank line"),
            }
        }
        let history = store.read_history()?.unwrap_or_default();
        debug!(tasks = tasks.len(), undo_steps = history.len(), "opened task list");

        Ok(TodoList {
            store,
            tasks,
            history,
            default_priority: Priority::default(),
        })
    }

    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history = self.history.with_depth(depth);
        self
    }

    /// Priority given to added tasks that do not specify one.
    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> TaskResult<&Task> {
        let position = self.position(index)?;
        Ok(&self.tasks[position])
    }

    /// The current list in its stored form.
    pub fn lines(&self) -> Vec<String> {
        encode_all(&self.tasks)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Appends a new open task and returns its index.
    pub fn add(&mut self, new_task: NewTask) -> TaskResult<usize> {
        let task = new_task.into_task(self.default_priority);
        self.apply(|tasks| {
            tasks.push(task);
            Ok(tasks.len())
        })
    }

    pub fn complete(&mut self, index: usize) -> TaskResult<()> {
        let position = self.position(index)?;
        self.apply(|tasks| {
            let task = &mut tasks[position];
            if task.is_done() {
                return Err(TaskError::AlreadyComplete(index));
            }
            task.status = Status::Done;
            Ok(())
        })
    }

    /// Replaces the description, keeping status, priority and annotations.
    pub fn edit(&mut self, index: usize, description: &str) -> TaskResult<()> {
        let position = self.position(index)?;
        let description = description.trim().to_string();
        self.apply(|tasks| {
            tasks[position].description = description;
            Ok(())
        })
    }

    pub fn prioritize(&mut self, index: usize, level: &str) -> TaskResult<()> {
        let position = self.position(index)?;
        let priority = parse_priority(level)?;
        self.apply(|tasks| {
            tasks[position].priority = Some(priority);
            Ok(())
        })
    }

    /// Removes a task. Tasks after it move up by one.
    pub fn delete(&mut self, index: usize) -> TaskResult<Task> {
        let position = self.position(index)?;
        self.apply(|tasks| Ok(tasks.remove(position)))
    }

    /// Tasks whose description, category or due date contain `keyword`,
    /// ignoring case, paired with their current index.
    pub fn search(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let keyword = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| matches_keyword(task, &keyword))
            .map(|(position, task)| (position + 1, task))
            .collect()
    }

    /// Stable sort: High, Medium, Low, then tasks without a priority glyph.
    pub fn sort_by_priority(&mut self) -> TaskResult<()> {
        self.apply(|tasks| {
            tasks.sort_by_key(|task| (task.priority.is_none(), task.priority));
            Ok(())
        })
    }

    /// Stable sort: tasks without a due date first, then earliest due date.
    pub fn sort_by_due_date(&mut self) -> TaskResult<()> {
        self.apply(|tasks| {
            tasks.sort_by_key(|task| task.due_date);
            Ok(())
        })
    }

    /// Removes every task and returns how many there were.
    pub fn clear(&mut self) -> TaskResult<usize> {
        self.apply(|tasks| {
            let count = tasks.len();
            tasks.clear();
            Ok(count)
        })
    }

    /// Restores the list as it was before the most recent mutation.
    ///
    /// The shortened history is written before the tasks file, so a snapshot
    /// can never be applied twice.
    pub fn undo(&mut self) -> TaskResult<()> {
        let snapshot = self.history.pop().ok_or(TaskError::NothingToUndo)?;
        let tasks = decode_all(&snapshot);

        if let Err(error) = self.store.write_history(&self.history) {
            self.history.push(snapshot);
            return Err(error.into());
        }
        if let Err(error) = self.store.write_all(&encode_all(&tasks)) {
            self.history.push(snapshot);
            self.save_history();
            return Err(error.into());
        }
        self.tasks = tasks;
        debug!(tasks = self.tasks.len(), undo_steps = self.history.len(), "undid last change");
        Ok(())
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(position, task)| ExportRow::from_task(position + 1, task))
            .collect()
    }

    fn position(&self, index: usize) -> TaskResult<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }

    fn apply<T>(&mut self, change: impl FnOnce(&mut Vec<Task>) -> TaskResult<T>) -> TaskResult<T> {
        let mut working = self.tasks.clone();
        let outcome = change(&mut working)?;

        let previous: Snapshot = self.lines();
        self.store.write_all(&encode_all(&working))?;
        self.tasks = working;

        self.history.push(previous);
        self.save_history();
        debug!(tasks = self.tasks.len(), "saved task list");
        Ok(outcome)
    }

    /// Persists the history. Failures are logged, not returned: callers only
    /// use this once the outcome of the operation is settled.
    fn save_history(&mut self) {
        if let Err(error) = self.store.write_history(&self.history) {
            warn!(%error, "could not save undo history");
        }
    }
}

fn encode_all(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(codec::encode).collect()
}

fn decode_all(lines: &[String]) -> Vec<Task> {
    lines.iter().filter_map(|line| codec::decode(line).ok()).collect()
}

fn matches_keyword(task: &Task, keyword: &str) -> bool {
    let due = task.due_date.map(|d| d.format(DATE_FORMAT).to_string());
    let matched = [Some(task.description.as_str()), task.category.as_deref(), due.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(keyword));
    matched
}
