//! # todo - personal task list manager
//!
//! A command-line to-do list that keeps its tasks in a plain text file, one
//! task per line, readable and editable by hand.
//!
//! ## Features
//!
//! - **Priorities**: High 🔥, Medium 🔶 and Low 🔷 markers on every task
//! - **Annotations**: Optional due date and category per task
//! - **List Operations**: Add, complete, edit, prioritize, delete, clear
//! - **Search & Sort**: Case-insensitive search, sort by priority or due date
//! - **Undo**: Revert the most recent change
//! - **Data Export**: Export tasks to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_cli::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
