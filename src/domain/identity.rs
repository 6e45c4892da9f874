// src/domain/identity.rs
//
// Store-assigned identity shared by every persisted entity.
//
// An unsaved entity carries `None`; a saved one carries `Some(EntityId)`.
// The store hands the value out once, on insert, and it never changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a persisted row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base identity contract for anything the generic repository persists
pub trait Entity {
    /// `None` until the entity has been created in the store
    fn id(&self) -> Option<EntityId>;

    /// Records the identity the store assigned on insert
    fn assign_id(&mut self, id: EntityId);
}
