//! Line codec for stored tasks.
//!
//! Every task is stored as one line of text:
//!
//! ```text
//! line       := completion SP priority SP body
//! completion := "[ ]" | "[x]"
//! priority   := "🔥" | "🔶" | "🔷"
//! body       := description [ " (Due: " date ")" ] [ " [Category: " category "]" ]
//! date       := "YYYY-MM-DD"
//! ```
//!
//! Encoding goes through [`LineBuilder`], decoding through [`parse_line`],
//! which produces a [`ParsedLine`] before it becomes a [`Task`].
//!
//! ## Legacy lines
//!
//! Files written by earlier versions may lack the priority glyph, or any
//! marker at all (`buy milk`). Those lines still decode: a missing completion
//! marker means the task is open, a missing glyph leaves `priority` unset.
//! Annotations whose contents cannot be understood (for instance a due date
//! that is not `YYYY-MM-DD`) stay in the description verbatim, so the line is
//! written back unchanged. The only line that fails to decode is an empty one.
//!
//! ## Examples
//!
//! ```rust
//! use todo_cli::libs::codec::{decode, encode};
//! use todo_cli::libs::task::{Priority, Task};
//!
//! let task = Task::new("buy milk", Priority::High).with_category(Some("home"));
//! let line = encode(&task);
//! assert_eq!(line, "[ ] 🔥 buy milk [Category: home]");
//! assert_eq!(decode(&line).unwrap(), task);
//! ```

use super::task::{Priority, Status, Task};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DUE_OPEN: &str = "(Due: ";
const DUE_CLOSE: char = ')';
const CATEGORY_OPEN: &str = "[Category: ";
const CATEGORY_CLOSE: char = ']';
const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("cannot decode an empty line")]
    EmptyLine,
}

/// Fields recognised in a stored line.
///
/// Markers that were not present are `None`; it is up to the caller to decide
/// on defaults (see [`ParsedLine::into_task`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl ParsedLine {
    pub fn into_task(self) -> Task {
        Task {
            status: self.status.unwrap_or_default(),
            priority: self.priority,
            description: self.description,
            due_date: self.due_date,
            category: self.category,
        }
    }
}

/// Splits a stored line into its fields.
pub fn parse_line(line: &str) -> Result<ParsedLine, DecodeError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(DecodeError::EmptyLine);
    }

    let (status, rest) = take_status(line);
    let (priority, rest) = take_priority(rest);

    let mut body = rest.to_string();
    // Only canonical dates are captured, anything else would be rewritten on save
    let due_date = take_annotation(&mut body, DUE_OPEN, DUE_CLOSE, |inner| {
        NaiveDate::parse_from_str(inner, DATE_FORMAT)
            .ok()
            .filter(|date| date.format(DATE_FORMAT).to_string() == inner)
    });
    let category = take_annotation(&mut body, CATEGORY_OPEN, CATEGORY_CLOSE, |inner| {
        (!inner.is_empty()).then(|| inner.to_string())
    });

    Ok(ParsedLine {
        status,
        priority,
        description: body.trim().to_string(),
        due_date,
        category,
    })
}

pub fn decode(line: &str) -> Result<Task, DecodeError> {
    parse_line(line).map(ParsedLine::into_task)
}

pub fn encode(task: &Task) -> String {
    LineBuilder::new(task.status)
        .priority(task.priority)
        .description(&task.description)
        .due_date(task.due_date)
        .category(task.category.as_deref())
        .build()
}

fn take_status(line: &str) -> (Option<Status>, &str) {
    match line.get(..3).and_then(Status::from_marker) {
        Some(status) => (Some(status), line[3..].trim_start()),
        None => (None, line),
    }
}

fn take_priority(rest: &str) -> (Option<Priority>, &str) {
    for priority in Priority::ALL {
        if let Some(after) = rest.strip_prefix(priority.glyph()) {
            let after = after.strip_prefix(VARIATION_SELECTOR).unwrap_or(after);
            return (Some(priority), after.trim_start());
        }
    }
    (None, rest)
}

/// Finds the first `open ... close` span in `body` and hands its trimmed
/// contents to `parse`. When `parse` accepts them the span is cut out of
/// `body`; otherwise `body` is left as it was.
fn take_annotation<T>(body: &mut String, open: &str, close: char, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let start = body.find(open)?;
    let inner_start = start + open.len();
    let end = inner_start + body[inner_start..].find(close)?;

    let value = parse(body[inner_start..end].trim())?;

    let left = body[..start].trim_end();
    let right = body[end + close.len_utf8()..].trim_start();
    *body = match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{} {}", left, right),
        _ => format!("{}{}", left, right),
    };

    Some(value)
}

/// Assembles a stored line field by field.
///
/// Parts are joined with single spaces; absent optional fields add nothing.
/// Line breaks inside free text are replaced with spaces so the result is
/// always a single line.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    parts: Vec<String>,
}

impl LineBuilder {
    pub fn new(status: Status) -> Self {
        LineBuilder {
            parts: vec![status.marker().to_string()],
        }
    }

    pub fn priority(mut self, priority: Option<Priority>) -> Self {
        if let Some(priority) = priority {
            self.parts.push(priority.glyph().to_string());
        }
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        let description = single_line(description);
        if !description.is_empty() {
            self.parts.push(description);
        }
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        if let Some(date) = due_date {
            self.parts.push(format!("{}{}{}", DUE_OPEN, date.format(DATE_FORMAT), DUE_CLOSE));
        }
        self
    }

    pub fn category(mut self, category: Option<&str>) -> Self {
        if let Some(category) = category.map(single_line).filter(|c| !c.is_empty()) {
            self.parts.push(format!("{}{}{}", CATEGORY_OPEN, category, CATEGORY_CLOSE));
        }
        self
    }

    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n']).map(str::trim).filter(|s| !s.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_in_the_middle_leaves_single_space() {
        let task = decode("[ ] 🔶 pay (Due: 2024-01-05) rent").unwrap();
        assert_eq!(task.description, "pay rent");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn glyph_with_variation_selector_is_recognised() {
        let task = decode("[ ] 🔷\u{FE0F} water plants").unwrap();
        assert_eq!(task.priority, Some(Priority::Low));
        assert_eq!(task.description, "water plants");
    }

    #[test]
    fn multiline_description_is_flattened() {
        let task = Task::new("first\nsecond", Priority::Medium);
        assert_eq!(encode(&task), "[ ] 🔶 first second");
    }
}
