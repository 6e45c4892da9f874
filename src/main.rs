// src/main.rs
//
// Process bootstrap: logging, config, pool, schema, health report.
// Request handling lives outside this crate; it receives the services built here.

use std::sync::Arc;

use anyhow::Context;
use log::info;

use cafe_store::config::DatabaseConfig;
use cafe_store::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use cafe_store::domain::{Menu, Order, User};
use cafe_store::logging::{default_log_level, init_logging};
use cafe_store::repositories::{CrudRepository, MenuRepository, OrderRepository, UserRepository};
use cafe_store::services::{MenuService, OrderService};

fn main() -> anyhow::Result<()> {
    // 1. LOGGING
    let _logger = init_logging(default_log_level()).context("failed to start logging")?;

    // 2. CONFIG + POOL
    let config = DatabaseConfig::from_env().context("failed to load database config")?;
    let pool = Arc::new(create_connection_pool(&config).context("failed to open database")?);

    // Schema is idempotent; integrity is checked on every start
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn).context("failed to create tables")?;
        verify_database_integrity(&conn)?;

        let stats = get_database_stats(&conn)?;
        info!(
            "event=database_ready path={} size_bytes={} menus={} orders={} users={}",
            config.database_path.display(),
            stats.size_bytes,
            stats.menu_count,
            stats.order_count,
            stats.user_count
        );
    }

    // 3. REPOSITORIES
    let menu_repo: Arc<dyn CrudRepository<Menu>> = Arc::new(MenuRepository::new(pool.clone()));
    let order_repo: Arc<dyn CrudRepository<Order>> = Arc::new(OrderRepository::new(pool.clone()));
    let user_repo: Arc<dyn CrudRepository<User>> = Arc::new(UserRepository::new(pool.clone()));

    // 4. SERVICES
    let menu_service = MenuService::new(menu_repo.clone());
    let order_service = OrderService::new(order_repo, menu_repo, user_repo);

    let menus = menu_service.list_menus()?;
    let orders = order_service.list_orders()?;
    info!(
        "event=services_ready menus={} orders={}",
        menus.len(),
        orders.len()
    );

    Ok(())
}
