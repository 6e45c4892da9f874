// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The store rejected a statement (constraint violation, type mismatch, busy).
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No pooled connection became available before the checkout timeout.
    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller broke a documented precondition (e.g. updating an unsaved entity).
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// A mapper produced column assignments that do not fit its table schema.
    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource not found")]
    NotFound,
}

impl AppError {
    pub fn precondition(message: impl Into<String>) -> Self {
        AppError::Precondition(message.into())
    }

    pub fn mapping(message: impl Into<String>) -> Self {
        AppError::Mapping(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config(message.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
