//! Display implementation for todo application messages.
//!
//! All user-facing text lives here so that command handlers only deal with
//! [`Message`] variants and their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Added task: '{}'", description),
            Message::TaskCompleted(index) => format!("Task {} marked as complete.", index),
            Message::TaskAlreadyCompleted(index) => format!("Task {} is already completed.", index),
            Message::TaskDeleted(line) => format!("Deleted task: '{}'", line),
            Message::TaskEdited(index, description) => format!("Task {} has been updated to: '{}'", index, description),
            Message::TaskPrioritized(index, level) => format!("Task {} has been prioritized as {}.", index, level),
            Message::InvalidTaskNumber(index, len) => match len {
                0 => format!("Invalid task number {}: the list is empty.", index),
                _ => format!("Invalid task number {}. Choose a number between 1 and {}.", index, len),
            },
            Message::InvalidPriority(level) => format!("Invalid priority '{}'. Use high, medium or low.", level),
            Message::TasksHeader => "Your To-Do List:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksCleared(count) => format!("All tasks have been cleared ({} removed).", count),
            Message::ConfirmClearTasks(count) => format!("Are you sure you want to clear all {} task(s)?", count),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader(keyword) => format!("Tasks containing '{}':", keyword),
            Message::NoSearchResults(keyword) => format!("No tasks found containing '{}'.", keyword),

            // === SORT MESSAGES ===
            Message::TasksSortedByPriority => "Tasks sorted by priority.".to_string(),
            Message::TasksSortedByDueDate => "Tasks sorted by due date.".to_string(),

            // === UNDO MESSAGES ===
            Message::UndoCompleted => "Last change has been undone.".to_string(),
            Message::NothingToUndo => "Nothing to undo.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks have been exported to {}", path),
            Message::NoTasksToExport => "No tasks to export.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),

            // === PROMPTS ===
            Message::PromptTaskDescription => "Enter the task description".to_string(),
            Message::PromptNewDescription => "Enter the new task description".to_string(),
            Message::PromptSearchKeyword => "Enter the keyword to search for".to_string(),
            Message::PromptTasksFile => "Tasks file".to_string(),
            Message::PromptHistoryDepth => "Undo steps to keep (0 disables undo)".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::PromptConfirmClear => "Ask for confirmation before clearing all tasks?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
