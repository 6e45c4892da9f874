use serde::{Deserialize, Serialize};

use crate::domain::identity::{Entity, EntityId};

/// An item on the cafe menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Store-assigned identifier, `None` until created
    pub id: Option<EntityId>,

    /// Display name ("Iced Latte")
    pub name: String,

    /// Price in the smallest currency unit
    pub price: i32,

    /// Free-form grouping ("coffee", "tea", "dessert")
    pub category: String,

    /// Image location, if one was uploaded
    pub image: Option<String>,
}

impl Menu {
    pub fn new(name: impl Into<String>, price: i32, category: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            category: category.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl Entity for Menu {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
