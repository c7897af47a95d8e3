#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;
    use todo_cli::commands::report;
    use todo_cli::libs::codec::DecodeError;
    use todo_cli::libs::error::{StoreError, TaskError};
    use todo_cli::libs::messages::Message;

    fn write_error() -> TaskError {
        TaskError::Store(StoreError::Write {
            path: PathBuf::from("todo.txt"),
            source: io::Error::other("disk full"),
        })
    }

    #[test]
    fn test_report_passes_values_through() {
        let value = report(Ok::<_, TaskError>(3)).unwrap();
        assert_eq!(value, Some(3));
    }

    #[test]
    fn test_report_handles_user_errors() {
        let user_errors = [
            TaskError::IndexOutOfRange { index: 4, len: 2 },
            TaskError::AlreadyComplete(1),
            TaskError::InvalidPriority("urgent".to_string()),
            TaskError::NothingToUndo,
        ];

        for error in user_errors {
            let value = report::<()>(Err(error)).unwrap();
            assert_eq!(value, None);
        }
    }

    #[test]
    fn test_report_propagates_storage_errors() {
        let err = report::<()>(Err(write_error())).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert!(matches!(
            err.downcast_ref::<TaskError>(),
            Some(TaskError::Store(StoreError::Write { .. }))
        ));
    }

    #[test]
    fn test_report_propagates_decode_errors() {
        let err = report::<()>(Err(TaskError::Decode(DecodeError::EmptyLine))).unwrap_err();
        assert!(matches!(err.downcast_ref::<TaskError>(), Some(TaskError::Decode(_))));
    }

    #[test]
    fn test_messages_for_user_errors() {
        assert_eq!(
            Message::from_task_error(&TaskError::IndexOutOfRange { index: 4, len: 2 }),
            Some(Message::InvalidTaskNumber(4, 2))
        );
        assert_eq!(
            Message::from_task_error(&TaskError::AlreadyComplete(1)),
            Some(Message::TaskAlreadyCompleted(1))
        );
        assert_eq!(
            Message::from_task_error(&TaskError::InvalidPriority("urgent".to_string())),
            Some(Message::InvalidPriority("urgent".to_string()))
        );
        assert_eq!(Message::from_task_error(&TaskError::NothingToUndo), Some(Message::NothingToUndo));
        assert_eq!(Message::from_task_error(&write_error()), None);
    }

    #[test]
    fn test_invalid_task_number_message() {
        assert_eq!(
            Message::InvalidTaskNumber(4, 2).to_string(),
            "Invalid task number 4. Choose a number between 1 and 2."
        );
    }
}
