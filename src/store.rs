//! The command façade over [`AppState`].
//!
//! Commands operate on "the current project" unless noted. Every command
//! validates first and mutates second, so an `Err` always means the state is
//! untouched; a caller can hand [`ProjectStore::state`] to the persistence
//! layer at whatever cadence it chooses.

use uuid::Uuid;

use crate::model::app_state::AppState;
use crate::model::project::{ContainerRef, Project};
use crate::ops::category_ops::{self, CategoryError, ItemDisposition};
use crate::ops::item_ops::{self, ItemError};
use crate::ops::project_ops::{self, ProjectError};

/// Error type for store commands
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no project selected")]
    NoProjectSelected,
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Item(#[from] ItemError),
}

/// Owns the application state and executes commands against it, each an
/// atomic transition.
#[derive(Debug, Default)]
pub struct ProjectStore {
    state: AppState,
}

impl ProjectStore {
    pub fn new(state: AppState) -> Self {
        ProjectStore { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Consume the store, yielding the state (serialization handoff).
    pub fn into_state(self) -> AppState {
        self.state
    }

    pub fn project(&self, project_id: Uuid) -> Option<&Project> {
        self.state.project(project_id)
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.state.current_project()
    }

    fn current_project_mut(&mut self) -> Result<&mut Project, StoreError> {
        // A dangling selection can only come from a hand-edited state file;
        // tolerant load already drops those, so both cases read as "none".
        let id = self
            .state
            .current_project_id
            .ok_or(StoreError::NoProjectSelected)?;
        self.state
            .project_mut(id)
            .ok_or(StoreError::NoProjectSelected)
    }

    // -----------------------------------------------------------------------
    // Project commands
    // -----------------------------------------------------------------------

    /// Create an empty project. Returns its id.
    pub fn create_project(&mut self, name: &str, description: &str) -> Result<Uuid, StoreError> {
        Ok(project_ops::create_project(&mut self.state, name, description)?)
    }

    /// Open a project for editing.
    pub fn select_project(&mut self, project_id: Uuid) -> Result<(), StoreError> {
        Ok(project_ops::select_project(&mut self.state, project_id)?)
    }

    /// Close the current project.
    pub fn deselect_project(&mut self) {
        project_ops::deselect_project(&mut self.state);
    }

    /// Remove a project and, if it was current, the selection.
    pub fn delete_project(&mut self, project_id: Uuid) -> Result<(), StoreError> {
        Ok(project_ops::delete_project(&mut self.state, project_id)?)
    }

    // -----------------------------------------------------------------------
    // Category commands (current project)
    // -----------------------------------------------------------------------

    /// Add an empty category to the current project. Returns its id.
    pub fn add_category(&mut self, name: &str) -> Result<Uuid, StoreError> {
        let project = self.current_project_mut()?;
        Ok(category_ops::add_category(project, name)?)
    }

    pub fn rename_category(&mut self, category_id: Uuid, new_name: &str) -> Result<(), StoreError> {
        let project = self.current_project_mut()?;
        Ok(category_ops::rename_category(project, category_id, new_name)?)
    }

    pub fn delete_category(
        &mut self,
        category_id: Uuid,
        disposition: ItemDisposition,
    ) -> Result<(), StoreError> {
        let project = self.current_project_mut()?;
        Ok(category_ops::delete_category(project, category_id, disposition)?)
    }

    /// Dissolve all categories of the current project into the pool; empty
    /// the pool too when `clear_pool_too` is set.
    pub fn clear_project(&mut self, clear_pool_too: bool) -> Result<(), StoreError> {
        let project = self.current_project_mut()?;
        category_ops::clear_project(project, clear_pool_too);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Item commands (current project)
    // -----------------------------------------------------------------------

    /// Bulk-add items to the current project's pool. Returns the new ids.
    pub fn add_items(&mut self, raw_text: &str) -> Result<Vec<Uuid>, StoreError> {
        let project = self.current_project_mut()?;
        Ok(item_ops::add_items(project, raw_text)?)
    }

    pub fn delete_item(&mut self, item_id: Uuid, container: ContainerRef) -> Result<(), StoreError> {
        let project = self.current_project_mut()?;
        Ok(item_ops::delete_item(project, item_id, container)?)
    }

    pub fn move_item(
        &mut self,
        item_id: Uuid,
        from: ContainerRef,
        to: ContainerRef,
    ) -> Result<(), StoreError> {
        let project = self.current_project_mut()?;
        Ok(item_ops::move_item(project, item_id, from, to)?)
    }
}
