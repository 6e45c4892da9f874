// src/db/transaction.rs
//
// Transaction scope for a single repository operation
//
// PRINCIPLES:
// - One operation, one connection, one transaction
// - Commit only when the work succeeded
// - Every other exit path rolls back and returns the connection to the pool
// - No ambient transaction state

use std::sync::Arc;

use log::{debug, warn};
use rusqlite::{Transaction, TransactionBehavior};

use super::connection::{get_connection, ConnectionPool};
use crate::error::AppResult;

/// Lock behaviour requested when the scope opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionMode {
    /// Deferred: takes a shared lock on first read, never blocks other readers
    Read,
    /// Immediate: takes the write lock up front so the statement cannot
    /// deadlock upgrading from a read lock
    Write,
}

impl TransactionMode {
    fn behavior(self) -> TransactionBehavior {
        match self {
            TransactionMode::Read => TransactionBehavior::Deferred,
            TransactionMode::Write => TransactionBehavior::Immediate,
        }
    }
}

/// Hands out pooled connections wrapped in a transaction scope
#[derive(Clone)]
pub struct TransactionProvider {
    pool: Arc<ConnectionPool>,
}

impl TransactionProvider {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<ConnectionPool> {
        &self.pool
    }

    /// Runs `work` inside a fresh transaction.
    ///
    /// The connection is checked out on entry and released when this returns,
    /// whatever the outcome. `work` returning `Err` rolls the transaction back
    /// and the error is passed through untouched.
    pub fn run<T, F>(&self, mode: TransactionMode, work: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(mode.behavior())?;

        match work(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(error) => {
                match tx.rollback() {
                    Ok(()) => debug!("event=tx_rollback status=ok cause={}", error),
                    Err(rollback_error) => warn!(
                        "event=tx_rollback status=failed cause={} rollback_error={}",
                        error, rollback_error
                    ),
                }
                Err(error)
            }
        }
    }

    pub fn read<T, F>(&self, work: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        self.run(TransactionMode::Read, work)
    }

    pub fn write<T, F>(&self, work: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        self.run(TransactionMode::Write, work)
    }
}
