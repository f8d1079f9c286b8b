use serde::{Deserialize, Serialize};

/// Configuration from sortflow.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base name of the state file (`<storage_key>.json`)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    "sortflowState".to_string()
}
