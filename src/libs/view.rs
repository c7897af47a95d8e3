//! Terminal rendering of task lists.
//!
//! Tasks are printed as a `prettytable` table with one row per task:
//!
//! ```text
//! +---+--------+----------+-------------+------------+----------+
//! | # | STATUS | PRIORITY | DESCRIPTION | DUE        | CATEGORY |
//! +---+--------+----------+-------------+------------+----------+
//! | 1 | [ ]    | 🔥       | pay rent    | 2024-01-05 | home     |
//! | 2 | [x]    | 🔶       | call mom    |            |          |
//! +---+--------+----------+-------------+------------+----------+
//! ```
//!
//! The `#` column is the 1-based index every other command takes, so the
//! table always shows the index of a task in the full list, even when only
//! some tasks are printed.

use super::codec::DATE_FORMAT;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints `(index, task)` pairs as a table.
    ///
    /// Indices are shown as given, so search results keep the numbers of the
    /// full list and can be passed straight to `complete`, `edit` and the
    /// other index-based commands.
    ///
    /// Tasks read from lines without a priority glyph show the glyph of their
    /// effective priority (medium). Absent due dates and categories leave the
    /// cell empty.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use todo_cli::libs::store::MemoryStore;
    /// use todo_cli::libs::todo_list::TodoList;
    /// use todo_cli::libs::view::View;
    ///
    /// let list = TodoList::open(MemoryStore::with_lines(["[ ] 🔥 pay rent"]))?;
    /// View::tasks(list.search("rent"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn tasks<'a>(tasks: impl IntoIterator<Item = (usize, &'a Task)>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "STATUS", "PRIORITY", "DESCRIPTION", "DUE", "CATEGORY"]);
        for (index, task) in tasks {
            table.add_row(row![
                index,
                task.status.marker(),
                task.priority().glyph(),
                task.description,
                task.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
                task.category.as_deref().unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints every task in stored order, numbered from 1.
    pub fn all(tasks: &[Task]) -> Result<()> {
        Self::tasks(tasks.iter().enumerate().map(|(i, task)| (i + 1, task)))
    }
}
