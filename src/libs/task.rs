//! Task record and its field types.
//!
//! A [`Task`] is the only entity the application manages. It carries a
//! completion status, an optional priority, a free-text description and two
//! optional annotations (due date and category). Tasks have no stable
//! identifier: within a session a task is addressed by its 1-based position
//! in the loaded list, and that position changes after delete, sort, clear
//! and undo.
//!
//! ## Priority
//!
//! Each priority level has a single glyph used in the stored line:
//!
//! | Level  | Glyph |
//! |--------|-------|
//! | High   | 🔥    |
//! | Medium | 🔶    |
//! | Low    | 🔷    |
//!
//! Lines written before priorities existed carry no glyph. Such tasks keep
//! `priority: None` so they are written back exactly as they were read, while
//! [`Task::priority`] reports them as [`Priority::Medium`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Completion status of a task. `Open -> Done` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Open,
    Done,
}

impl Status {
    /// Marker written at the start of every stored line.
    pub fn marker(self) -> &'static str {
        match self {
            Status::Open => "[ ]",
            Status::Done => "[x]",
        }
    }

    /// Parses a completion marker. `[X]` is accepted for hand-edited files.
    pub fn from_marker(token: &str) -> Option<Self> {
        match token {
            "[ ]" => Some(Status::Open),
            "[x]" | "[X]" => Some(Status::Done),
            _ => None,
        }
    }
}

/// Task priority, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn glyph(self) -> &'static str {
        match self {
            Priority::High => "🔥",
            Priority::Medium => "🔶",
            Priority::Low => "🔷",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a priority level string is not one of
/// `high`, `medium` or `low`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority level '{0}' (expected high, medium or low)")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub status: Status,
    /// `None` only for tasks decoded from lines without a priority glyph.
    pub priority: Option<Priority>,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl Task {
    pub fn new(description: &str, priority: Priority) -> Self {
        Task {
            status: Status::Open,
            priority: Some(priority),
            description: description.trim().to_string(),
            due_date: None,
            category: None,
        }
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Empty or whitespace-only categories are stored as no category.
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string);
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// Effective priority, `Medium` for legacy tasks without a glyph.
    pub fn priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}

/// Input for adding a task from the command line.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub description: String,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(description: &str) -> Self {
        NewTask {
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// Builds the task, falling back to `default_priority` when none was given.
    pub fn into_task(self, default_priority: Priority) -> Task {
        Task::new(&self.description, self.priority.unwrap_or(default_priority))
            .with_due_date(self.due_date)
            .with_category(self.category.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" low ".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_orders_high_first() {
        let mut levels = vec![Priority::Low, Priority::High, Priority::Medium];
        levels.sort();
        assert_eq!(levels, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn blank_category_is_dropped() {
        let task = Task::new("x", Priority::Low).with_category(Some("  "));
        assert_eq!(task.category, None);
    }

    #[test]
    fn legacy_task_reports_medium() {
        let mut task = Task::new("x", Priority::High);
        task.priority = None;
        assert_eq!(task.priority(), Priority::Medium);
    }
}
