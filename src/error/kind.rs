// src/error/kind.rs
//
// Error classification
//
// Callers branch on the kind of a failure, not on its concrete source:
// - NotFound / Precondition: the caller asked for something wrong
// - Persistence: the store refused the statement
// - PoolExhausted / Timeout: a resource bound was exceeded, retry is the caller's call
// - Invalid: domain rule or configuration rejected
// - Internal: anything else

use rusqlite::ErrorCode;
use serde::{Deserialize, Serialize};

use super::AppError;

/// Error categories a caller can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Precondition,
    Persistence,
    PoolExhausted,
    Timeout,
    Invalid,
    Internal,
}

impl ErrorKind {
    /// Whether retrying the same call later could succeed.
    pub fn is_transient(self) -> bool {
        matches!(self, ErrorKind::PoolExhausted | ErrorKind::Timeout)
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound => ErrorKind::NotFound,
            AppError::Precondition(_) => ErrorKind::Precondition,
            AppError::Pool(_) => ErrorKind::PoolExhausted,
            AppError::Database(db_error) => classify_database_error(db_error),
            AppError::Domain(_) | AppError::Config(_) => ErrorKind::Invalid,
            AppError::Mapping(_) | AppError::Serialization(_) | AppError::Io(_) => {
                ErrorKind::Internal
            }
        }
    }
}

fn classify_database_error(error: &rusqlite::Error) -> ErrorKind {
    match error.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => ErrorKind::Timeout,
        _ => ErrorKind::Persistence,
    }
}
