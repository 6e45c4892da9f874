// src/domain/mod.rs
//
// Domain Root - entity records and their invariants
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod identity;
pub mod menu;
pub mod order;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use identity::{Entity, EntityId};

// Menu Domain
pub use menu::{validate_menu, Menu};

// Order Domain
pub use order::{validate_order, Order, OrderStatus};

// User Domain
pub use user::{validate_user, User};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: OrderStatus, to: OrderStatus },

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
