use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::identity::{Entity, EntityId};

/// A cafe user (customer or staff)
///
/// The password is opaque here: whatever the caller hands over is stored
/// and returned as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<EntityId>,
    pub nickname: String,
    pub password: String,

    /// Role tags, kept sorted so stored and loaded values compare equal
    pub roles: BTreeSet<String>,
}

impl User {
    pub fn new(nickname: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            nickname: nickname.into(),
            password: password.into(),
            roles: BTreeSet::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

impl Entity for User {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
