use thiserror::Error;

/// All possible errors in the ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Employee #{0} not found")]
    EmployeeNotFound(i64),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LedgerError>;
