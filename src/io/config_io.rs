use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::StoreConfig;

/// Name of the optional config file next to the state file
pub const CONFIG_FILE: &str = "sortflow.toml";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse sortflow.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read `sortflow.toml` from `dir`. A missing file yields the defaults;
/// unlike the state blob, a malformed config is an error, since the file is
/// developer-authored.
pub fn read_config(dir: &Path) -> Result<StoreConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(StoreConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
