#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(usize),
    TaskAlreadyCompleted(usize),
    TaskDeleted(String),
    TaskEdited(usize, String),
    TaskPrioritized(usize, String),
    InvalidTaskNumber(usize, usize), // index, list length
    InvalidPriority(String),
    TasksHeader,
    NoTasksFound,
    TasksCleared(usize),
    ConfirmClearTasks(usize),

    // === SEARCH MESSAGES ===
    SearchResultsHeader(String),
    NoSearchResults(String),

    // === SORT MESSAGES ===
    TasksSortedByPriority,
    TasksSortedByDueDate,

    // === UNDO MESSAGES ===
    UndoCompleted,
    NothingToUndo,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NoTasksToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,

    // === PROMPTS ===
    PromptTaskDescription,
    PromptNewDescription,
    PromptSearchKeyword,
    PromptTasksFile,
    PromptHistoryDepth,
    PromptDefaultPriority,
    PromptConfirmClear,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
