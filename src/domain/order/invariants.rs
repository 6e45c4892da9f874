use super::entity::Order;
use crate::domain::{DomainError, DomainResult};

/// Validates all Order invariants
pub fn validate_order(order: &Order) -> DomainResult<()> {
    if order.order_code.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Order code cannot be empty".to_string(),
        ));
    }
    if order.price < 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Order price cannot be negative, got {}",
            order.price
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Order domain:
///
/// 1. Order code is never blank
/// 2. Price is a snapshot and never negative
/// 3. Menu and user references are not checked here; the store enforces them
