use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::identity::{Entity, EntityId};
use crate::domain::DomainError;

/// A single order placed by a user for one menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier, `None` until created
    pub id: Option<EntityId>,

    /// Caller-assigned code shown to the customer
    pub order_code: String,

    /// Ordered menu item
    pub menu_id: EntityId,

    /// Ordering user
    pub user_id: EntityId,

    /// Menu price at the time the order was placed
    pub price: i32,

    pub status: OrderStatus,

    /// Local wall-clock time of the order
    pub ordered_at: NaiveDateTime,
}

/// Lifecycle of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Ready,
    InProgress,
    Completed,
    Cancelled,
}

impl Order {
    /// Creates a fresh order in `Ready` state
    pub fn new(
        order_code: impl Into<String>,
        menu_id: EntityId,
        user_id: EntityId,
        price: i32,
        ordered_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            order_code: order_code.into(),
            menu_id,
            user_id,
            price,
            status: OrderStatus::Ready,
            ordered_at,
        }
    }

    /// Moves the order to `next`, rejecting transitions out of terminal states
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidStateTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Ready,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        if self == next {
            return true;
        }
        match self {
            OrderStatus::Ready => {
                matches!(next, OrderStatus::InProgress | OrderStatus::Cancelled)
            }
            OrderStatus::InProgress => {
                matches!(next, OrderStatus::Completed | OrderStatus::Cancelled)
            }
            OrderStatus::Completed | OrderStatus::Cancelled => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Ready => "READY",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Entity for Order {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}
