use std::path::{Path, PathBuf};

use log::info;
use uuid::Uuid;

use crate::io::config_io::{self, ConfigError};
use crate::io::state_io::{self, StateIoError};
use crate::store::{ProjectStore, StoreError};

/// Error type for session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("project {id} created but state not persisted: {source}")]
    SaveFailed { id: Uuid, source: StateIoError },
}

/// A store bound to its state file: the durable counterpart of
/// [`ProjectStore`].
///
/// Commands go through [`Session::store_mut`]; persistence happens on
/// [`Session::save`], at whatever cadence the caller chooses (an explicit
/// save action, shutdown). The one exception is [`Session::create_project`],
/// which persists immediately.
pub struct Session {
    store: ProjectStore,
    state_path: PathBuf,
}

impl Session {
    /// Open a session over `dir`: read the optional config, then the state
    /// blob named by its storage key.
    pub fn open(dir: &Path) -> Result<Session, SessionError> {
        let config = config_io::read_config(dir)?;
        let state_path = dir.join(format!("{}.json", config.storage_key));
        let state = state_io::load_state(&state_path);
        info!(
            "opened session with {} project(s) at {}",
            state.projects.len(),
            state_path.display()
        );
        Ok(Session {
            store: ProjectStore::new(state),
            state_path,
        })
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Persist the current state.
    pub fn save(&self) -> Result<(), StateIoError> {
        state_io::save_state(&self.state_path, self.store.state())
    }

    /// Create a project and persist immediately (the only command with its
    /// own write). A failed write leaves the in-memory project in place and
    /// reports its id alongside the error.
    pub fn create_project(&mut self, name: &str, description: &str) -> Result<Uuid, SessionError> {
        let id = self.store.create_project(name, description)?;
        match self.save() {
            Ok(()) => Ok(id),
            Err(source) => Err(SessionError::SaveFailed { id, source }),
        }
    }
}
