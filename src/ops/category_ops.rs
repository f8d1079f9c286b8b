use uuid::Uuid;

use crate::model::category::Category;
use crate::model::project::Project;

/// Error type for category operations
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category not found: {0}")]
    NotFound(Uuid),
    #[error("category name is empty")]
    EmptyName,
    #[error("category name already in use: {0}")]
    DuplicateName(String),
}

/// What to do with a deleted category's items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDisposition {
    /// Append them to the project's unsorted pool
    MoveToPool,
    /// Discard them together with the category
    Discard,
}

/// Add an empty category. The name is trimmed; empty and duplicate names are
/// rejected. Returns the new category's id.
pub fn add_category(project: &mut Project, name: &str) -> Result<Uuid, CategoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryError::EmptyName);
    }
    if project.categories.iter().any(|c| c.name == name) {
        return Err(CategoryError::DuplicateName(name.to_string()));
    }
    let category = Category::new(name.to_string());
    let id = category.id;
    project.categories.push(category);
    project.touch();
    Ok(id)
}

/// Rename a category. Name uniqueness is enforced the same way as on
/// creation; renaming a category to its own current name is allowed.
pub fn rename_category(
    project: &mut Project,
    category_id: Uuid,
    new_name: &str,
) -> Result<(), CategoryError> {
    let new_name = new_name.trim();
    if new_name.is_empty() {
        return Err(CategoryError::EmptyName);
    }
    if project
        .categories
        .iter()
        .any(|c| c.id != category_id && c.name == new_name)
    {
        return Err(CategoryError::DuplicateName(new_name.to_string()));
    }
    let category = project
        .category_mut(category_id)
        .ok_or(CategoryError::NotFound(category_id))?;
    category.name = new_name.to_string();
    project.touch();
    Ok(())
}

/// Delete a category, either salvaging its items into the pool (appended at
/// the end, order preserved) or discarding them together with it.
pub fn delete_category(
    project: &mut Project,
    category_id: Uuid,
    disposition: ItemDisposition,
) -> Result<(), CategoryError> {
    let idx = project
        .categories
        .iter()
        .position(|c| c.id == category_id)
        .ok_or(CategoryError::NotFound(category_id))?;
    let category = project.categories.remove(idx);
    if disposition == ItemDisposition::MoveToPool {
        project.items.extend(category.items);
    }
    project.touch();
    Ok(())
}

/// Dissolve all categories, moving their items into the pool in category
/// order; empty the pool as well when `clear_pool_too` is set.
pub fn clear_project(project: &mut Project, clear_pool_too: bool) {
    for category in project.categories.drain(..) {
        project.items.extend(category.items);
    }
    if clear_pool_too {
        project.items.clear();
    }
    project.touch();
}
