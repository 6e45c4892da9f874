// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use cafe_store::config::DatabaseConfig;
use cafe_store::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use tempfile::TempDir;

/// An on-disk database in a temp dir; the dir is removed when this drops
pub struct TestDb {
    pub dir: TempDir,
    pub config: DatabaseConfig,
    pub pool: Arc<ConnectionPool>,
}

impl TestDb {
    pub fn new() -> Self {
        Self::with(|_| {})
    }

    pub fn with(adjust: impl FnOnce(&mut DatabaseConfig)) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let mut config = DatabaseConfig::for_path(dir.path().join("cafe.db"));
        config.min_idle = 0;
        config.connection_timeout = Duration::from_secs(2);
        adjust(&mut config);

        let pool = Arc::new(create_connection_pool(&config).expect("pool"));
        {
            let conn = get_connection(&pool).expect("connection");
            initialize_database(&conn).expect("schema");
        }

        Self { dir, config, pool }
    }
}
