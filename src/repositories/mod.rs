// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod crud_repository;
pub mod mapper;
pub mod menu_repository;
pub mod order_repository;
pub mod schema;
pub mod statements;
pub mod user_repository;

pub use crud_repository::{CrudRepository, SqliteCrudRepository};
pub use mapper::{EntityMapper, RowValues};
pub use menu_repository::{MenuMapper, MenuRepository, MENU_TABLE};
pub use order_repository::{OrderMapper, OrderRepository, ORDER_TABLE};
pub use schema::{Column, ColumnType, TableSchema};
pub use user_repository::{UserMapper, UserRepository, USER_TABLE};

#[cfg(test)]
pub use crud_repository::MockCrudRepository;

/// Every table, in creation order (referenced tables first)
pub const ALL_TABLES: [&TableSchema; 3] = [&MENU_TABLE, &USER_TABLE, &ORDER_TABLE];
