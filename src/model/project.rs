use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::item::Item;

/// Addresses one of a project's item containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRef {
    /// The project's unsorted pool
    Pool,
    /// A category by id
    Category(Uuid),
}

/// A project: an unsorted pool of items plus zero or more categories.
///
/// Every item belongs to exactly one container, either the pool or a single
/// category. All mutation goes through the ops layer, which upholds that
/// invariant and bumps `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Bumped on every mutation of the project's items or categories
    pub updated_at: DateTime<Utc>,
    /// The unsorted pool
    pub items: Vec<Item>,
    pub categories: Vec<Category>,
}

impl Project {
    /// Create an empty project with a fresh id and current timestamps.
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
            items: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Look up a category by id.
    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Items of the given container, or None for an unknown category id.
    pub fn container_items(&self, container: ContainerRef) -> Option<&[Item]> {
        match container {
            ContainerRef::Pool => Some(&self.items),
            ContainerRef::Category(id) => self.category(id).map(|c| c.items.as_slice()),
        }
    }

    /// Total item count across the pool and all categories.
    pub fn total_item_count(&self) -> usize {
        self.items.len() + self.categories.iter().map(|c| c.items.len()).sum::<usize>()
    }

    /// Refresh `updated_at`. Each mutating op calls this exactly once, after
    /// its mutation has succeeded.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
