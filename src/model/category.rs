use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::Item;

/// A named container of items within a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    /// Unique among the project's categories
    pub name: String,
    /// Append-ordered; exclusively owned by this category
    pub items: Vec<Item>,
}

impl Category {
    /// Create an empty category with a fresh id.
    pub fn new(name: String) -> Self {
        Category {
            id: Uuid::new_v4(),
            name,
            items: Vec::new(),
        }
    }
}
