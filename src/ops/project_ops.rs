use uuid::Uuid;

use crate::model::app_state::AppState;
use crate::model::project::Project;

/// Error type for project-level operations
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project not found: {0}")]
    NotFound(Uuid),
    #[error("project name is empty")]
    EmptyName,
}

/// Create an empty project and append it to the state.
/// The name must be non-empty after trimming; the trimmed form is stored.
/// Returns the new project's id.
pub fn create_project(
    state: &mut AppState,
    name: &str,
    description: &str,
) -> Result<Uuid, ProjectError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProjectError::EmptyName);
    }
    let project = Project::new(name.to_string(), description.to_string());
    let id = project.id;
    state.projects.push(project);
    Ok(id)
}

/// Open a project for editing. Unknown ids are rejected so the selection
/// always references an existing project.
pub fn select_project(state: &mut AppState, project_id: Uuid) -> Result<(), ProjectError> {
    if state.project(project_id).is_none() {
        return Err(ProjectError::NotFound(project_id));
    }
    state.current_project_id = Some(project_id);
    Ok(())
}

/// Close the current project, if any.
pub fn deselect_project(state: &mut AppState) {
    state.current_project_id = None;
}

/// Remove a project outright. Clears the selection when it pointed at the
/// removed project.
pub fn delete_project(state: &mut AppState, project_id: Uuid) -> Result<(), ProjectError> {
    let idx = state
        .projects
        .iter()
        .position(|p| p.id == project_id)
        .ok_or(ProjectError::NotFound(project_id))?;
    state.projects.remove(idx);
    if state.current_project_id == Some(project_id) {
        state.current_project_id = None;
    }
    Ok(())
}
