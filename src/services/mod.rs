// src/services/mod.rs
//
// Application services on top of the repositories.
// Validation and lifecycle rules live here; persistence stays in the repositories.

pub mod menu_service;
pub mod order_service;
pub mod user_service;

pub use menu_service::{MenuService, RegisterMenuRequest};
pub use order_service::{generate_order_code, OrderService, PlaceOrderRequest};
pub use user_service::{RegisterUserRequest, UserService};
