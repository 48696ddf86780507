use thiserror::Error;

/// All possible errors in the task tracker
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task #{0} not found")]
    TaskNotFound(i64),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TaskError>;
