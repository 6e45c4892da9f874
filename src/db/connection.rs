// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - The pool is built once and injected, never reached through a global
// - No hidden connection creation
// - Clear error propagation

use std::time::Duration;

use log::info;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool
///
/// Every connection the pool opens gets:
/// - Foreign keys enabled (not default in SQLite)
/// - WAL journal so readers do not block the single writer
/// - Busy timeout from the config, bounding how long a statement waits on a lock
pub fn create_connection_pool(config: &DatabaseConfig) -> AppResult<ConnectionPool> {
    config.validate()?;

    if let Some(parent) = config
        .database_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }

    let busy_timeout = config.busy_timeout;
    let manager = SqliteConnectionManager::file(&config.database_path)
        .with_init(move |conn| configure_connection(conn, busy_timeout));

    let pool = Pool::builder()
        .max_size(config.pool_size)
        .min_idle(Some(config.min_idle))
        .connection_timeout(config.connection_timeout)
        .idle_timeout(Some(config.idle_timeout))
        .max_lifetime(Some(config.max_lifetime))
        .build(manager)
        .map_err(|e| AppError::config(format!("Failed to create connection pool: {}", e)))?;

    info!(
        "event=pool_created database={} max_size={} min_idle={} checkout_timeout_ms={}",
        config.database_path.display(),
        config.pool_size,
        config.min_idle,
        config.connection_timeout.as_millis()
    );

    Ok(pool)
}

/// Get a connection from the pool
///
/// Blocks until a connection is free or the pool's checkout timeout elapses.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone connection (for testing)
///
/// This creates an in-memory database, useful for unit tests that do not
/// need a pool.
pub fn create_test_connection() -> AppResult<Connection> {
    let mut conn = Connection::open_in_memory().map_err(AppError::Database)?;
    configure_connection(&mut conn, Duration::from_millis(0)).map_err(AppError::Database)?;
    Ok(conn)
}

fn configure_connection(conn: &mut Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", true)?;
    // journal_mode answers with the mode it settled on (in-memory stays "memory")
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> DatabaseConfig {
        let mut config = DatabaseConfig::for_path(dir.path().join("nested").join("cafe.db"));
        config.pool_size = 2;
        config.connection_timeout = Duration::from_millis(200);
        config
    }

    #[test]
    fn test_connection_pool_creation() {
        let dir = TempDir::new().unwrap();
        let config = temp_config(&dir);
        let pool = create_connection_pool(&config).unwrap();
        let conn = get_connection(&pool).unwrap();

        // Verify foreign keys are enabled
        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);

        let journal_mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");

        assert!(config.database_path.exists());
    }

    #[test]
    fn test_checkout_times_out_when_pool_is_drained() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        config.pool_size = 1;
        config.min_idle = 0;
        let pool = create_connection_pool(&config).unwrap();

        let _held = get_connection(&pool).unwrap();
        let result = get_connection(&pool);

        assert!(matches!(result, Err(AppError::Pool(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_building() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        config.min_idle = 10;

        assert!(matches!(
            create_connection_pool(&config),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_unopenable_database_is_not_reported_as_exhaustion() {
        let dir = TempDir::new().unwrap();
        // A directory where the database file should be
        let mut config = DatabaseConfig::for_path(dir.path());
        config.connection_timeout = Duration::from_millis(200);

        let error = create_connection_pool(&config).unwrap_err();

        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(error.kind(), crate::error::ErrorKind::Invalid);
        assert!(!error.kind().is_transient());
    }

    #[test]
    fn test_test_connection() {
        let conn = create_test_connection().unwrap();

        // Verify it's a working connection
        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);

        // Verify foreign keys are enabled
        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);
    }
}
