pub mod entity;
pub mod invariants;

pub use entity::{Order, OrderStatus};
pub use invariants::validate_order;
