// src/db/bootstrap.rs
//
// Schema bootstrap and operator checks
//
// PRINCIPLES:
// - Tables are created from the same schema declarations the repositories use
// - Idempotent: safe to call on every start
// - No version tracking; an existing table is left as it is

use log::info;
use rusqlite::Connection;

use crate::error::{AppError, AppResult};
use crate::repositories::{
    statements, TableSchema, ALL_TABLES, MENU_TABLE, ORDER_TABLE, USER_TABLE,
};

/// Creates every table that does not exist yet, in one transaction
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    for schema in ALL_TABLES {
        tx.execute_batch(&schema.create_table_sql())?;
    }
    tx.commit()?;

    info!(
        "event=schema_ready tables={}",
        ALL_TABLES.iter().map(|schema| schema.name).collect::<Vec<_>>().join(",")
    );
    Ok(())
}

/// Verify database integrity
///
/// Runs SQLite's integrity check. Should be called periodically.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    if result != "ok" {
        return Err(AppError::config(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// Get database statistics
///
/// Returns useful info for debugging and monitoring
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn
        .query_row("PRAGMA page_count", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let page_size: i64 = conn
        .query_row("PRAGMA page_size", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        menu_count: count_rows(conn, &MENU_TABLE)?,
        order_count: count_rows(conn, &ORDER_TABLE)?,
        user_count: count_rows(conn, &USER_TABLE)?,
    })
}

fn count_rows(conn: &Connection, schema: &TableSchema) -> AppResult<i64> {
    conn.query_row(&statements::count(schema), [], |row| row.get(0))
        .map_err(AppError::Database)
}

/// Database statistics
#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub menu_count: i64,
    pub order_count: i64,
    pub user_count: i64,
}
