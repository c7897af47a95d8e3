pub mod add;
pub mod clear;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod prioritize;
pub mod search;
pub mod sort;
pub mod undo;
pub mod view;

use crate::libs::config::Config;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::messages::Message;
use crate::libs::store::FileStore;
use crate::libs::todo_list::TodoList;
use crate::{msg_debug, msg_error, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a new task to your to-do list")]
    Add(add::AddArgs),
    #[command(about = "View all tasks")]
    View,
    #[command(about = "Mark a task as complete", arg_required_else_help = true)]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Clear all tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Edit a task description", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Search for tasks containing a keyword")]
    Search(search::SearchArgs),
    #[command(about = "Set the priority of an existing task", arg_required_else_help = true)]
    Prioritize(prioritize::PrioritizeArgs),
    #[command(about = "Sort tasks by priority or due date")]
    Sort(sort::SortArgs),
    #[command(about = "Export tasks to a file")]
    Export(export::ExportArgs),
    #[command(about = "Undo the last change")]
    Undo,
}

#[derive(Debug, Parser)]
#[command(name = "todo", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::View => view::cmd(),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Prioritize(args) => prioritize::cmd(args),
            Commands::Sort(args) => sort::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Undo => undo::cmd(),
        }
    }
}

/// Opens the configured tasks file with the configured undo depth and
/// default priority.
pub fn open_list(config: &Config) -> Result<TodoList<FileStore>> {
    msg_debug!(format!("Using tasks file {}", config.tasks_file().display()));
    let list = TodoList::open(config.store())?
        .with_history_depth(config.history_depth)
        .with_default_priority(config.default_priority);
    Ok(list)
}

/// Prints user-caused engine errors and returns `Ok(None)` for them so the
/// command ends normally. Storage failures are propagated.
pub fn report<T>(result: TaskResult<T>) -> Result<Option<T>> {
    let error = match result {
        Ok(value) => return Ok(Some(value)),
        Err(error) => error,
    };

    match Message::from_task_error(&error) {
        Some(message) => {
            match error {
                TaskError::AlreadyComplete(_) | TaskError::NothingToUndo => msg_warning!(message),
                _ => msg_error!(message),
            }
            Ok(None)
        }
        None => Err(error.into()),
    }
}
