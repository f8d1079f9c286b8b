use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::model::app_state::AppState;
use crate::model::project::Project;

/// Error type for state persistence
#[derive(Debug, thiserror::Error)]
pub enum StateIoError {
    #[error("could not write state file: {0}")]
    Write(#[from] std::io::Error),
    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load application state from `path`.
///
/// Startup must always succeed: a missing file, malformed JSON, or a
/// `projects` field that is not an array all degrade to the empty initial
/// state rather than an error.
pub fn load_state(path: &Path) -> AppState {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            debug!("no state file at {}, starting empty", path.display());
            return AppState::default();
        }
    };
    parse_state(&raw)
}

/// Tolerant parse of a persisted state blob.
fn parse_state(raw: &str) -> AppState {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("malformed state JSON, starting empty: {}", e);
            return AppState::default();
        }
    };
    let Value::Object(mut fields) = value else {
        warn!("state JSON is not an object, starting empty");
        return AppState::default();
    };

    let projects = match fields.remove("projects") {
        Some(value @ Value::Array(_)) => match serde_json::from_value::<Vec<Project>>(value) {
            Ok(projects) => projects,
            Err(e) => {
                warn!("unreadable projects in state file, starting empty: {}", e);
                Vec::new()
            }
        },
        Some(_) => {
            warn!("projects field is not an array, treating as empty");
            Vec::new()
        }
        None => Vec::new(),
    };

    // Drop a selection that does not reference a loaded project, so the
    // invariant holds from startup onward.
    let current_project_id = fields
        .remove("currentProjectId")
        .and_then(|value| serde_json::from_value::<Option<Uuid>>(value).ok())
        .flatten()
        .filter(|id| projects.iter().any(|p| p.id == *id));

    AppState {
        projects,
        current_project_id,
    }
}

/// Serialize `state` to `path` atomically (temp file + rename), so a failed
/// write never truncates the previous blob.
pub fn save_state(path: &Path, state: &AppState) -> Result<(), StateIoError> {
    let json = serde_json::to_string_pretty(state)?;
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    debug!(
        "saved {} project(s) to {}",
        state.projects.len(),
        path.display()
    );
    Ok(())
}
