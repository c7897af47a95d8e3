pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use super::error::TaskError;

impl Message {
    /// User-facing message for an engine error, when the error is one the
    /// user caused. Storage failures return `None` and should be propagated.
    pub fn from_task_error(error: &TaskError) -> Option<Message> {
        match error {
            TaskError::IndexOutOfRange { index, len } => Some(Message::InvalidTaskNumber(*index, *len)),
            TaskError::AlreadyComplete(index) => Some(Message::TaskAlreadyCompleted(*index)),
            TaskError::InvalidPriority(level) => Some(Message::InvalidPriority(level.clone())),
            TaskError::NothingToUndo => Some(Message::NothingToUndo),
            TaskError::Decode(_) | TaskError::Store(_) => None,
        }
    }
}
