//! Store configuration handling.
//!
//! A store configuration names the KeePass database and the key file that
//! unlocks it. JSON is the default format; files ending in `.toml` are read
//! as TOML with the same keys:
//!
//! ```json
//! { "db": "/home/me/passwords.kdbx", "key": "/home/me/passwords.key" }
//! ```

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A named reference to a store configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreDefinition {
    #[serde(default)]
    pub name: String,
    pub path: PathBuf,
}

impl StoreDefinition {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Location of a database and the credentials that open it.
#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the KeePass database file.
    #[serde(rename = "db")]
    pub database_path: PathBuf,
    /// Path to the key file.
    #[serde(rename = "key")]
    pub key_path: PathBuf,
    /// Optional master password combined with the key file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("database_path", &self.database_path)
            .field("key_path", &self.key_path)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl StoreConfig {
    /// Load a store configuration from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path)
            .map_err(|e| StoreError::config(path, format!("failed to read config file: {e}")))?;

        let config = Self::parse(path, &contents)?;

        tracing::info!("Loaded store config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(contents)
                .map_err(|e| StoreError::config(path, format!("failed to parse config file: {e}")))
        } else {
            serde_json::from_str(contents)
                .map_err(|e| StoreError::config(path, format!("failed to parse config file: {e}")))
        }
    }
}

/// Pick the configuration file for a set of store definitions.
///
/// A single definition names its own config file; any other count falls
/// back to `default_config`.
pub fn resolve_config_path(stores: &[StoreDefinition], default_config: &Path) -> PathBuf {
    match stores {
        [only] => only.path.clone(),
        _ => default_config.to_path_buf(),
    }
}
