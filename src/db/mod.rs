// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Per-operation transaction scopes
// - Schema bootstrap and database utilities

pub mod bootstrap;
pub mod connection;
pub mod transaction;

pub use connection::{create_connection_pool, get_connection, ConnectionPool, PooledConn};

pub use transaction::{TransactionMode, TransactionProvider};

pub use bootstrap::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};
