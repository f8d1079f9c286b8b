use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::project::Project;

/// The whole persisted application state: all projects, plus which one is
/// open for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub projects: Vec<Project>,
    /// If set, always references an existing project
    #[serde(default)]
    pub current_project_id: Option<Uuid>,
}

impl AppState {
    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// The project currently open for editing, if any.
    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id.and_then(|id| self.project(id))
    }
}
