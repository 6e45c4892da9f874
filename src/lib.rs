// src/lib.rs
// Cafe store - persistence core for a small cafe ordering backend
//
// Architecture:
// - Domain: plain records (menu, order, user) and their invariants
// - Repositories: one generic CRUD implementation, one mapper per table
// - Transactions: every repository call runs in its own pooled transaction
// - Services: validation and order lifecycle on top of the repositories
// - Explicit: the pool and config are built once and injected, never global

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_menu, validate_order, validate_user, DomainError, Entity, EntityId, Menu, Order,
    OrderStatus, User,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult, ErrorKind};

// ============================================================================
// PUBLIC API - Configuration and database
// ============================================================================

pub use config::DatabaseConfig;
pub use db::{
    create_connection_pool, initialize_database, ConnectionPool, TransactionMode,
    TransactionProvider,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CrudRepository, EntityMapper, MenuRepository, OrderRepository, SqliteCrudRepository,
    UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    MenuService, OrderService, PlaceOrderRequest, RegisterMenuRequest, RegisterUserRequest,
    UserService,
};
