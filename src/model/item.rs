use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single sortable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity, unique for the lifetime of the owning project
    pub id: Uuid,
    /// Display name (non-empty; the ops layer trims before constructing)
    pub name: String,
}

impl Item {
    /// Create an item with a fresh id.
    pub fn new(name: String) -> Self {
        Item {
            id: Uuid::new_v4(),
            name,
        }
    }
}
