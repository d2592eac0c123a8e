//! Customizer configuration (TOML)
//!
//! ```toml
//! storage_key = "hydra-theme-presets"
//!
//! [store]
//! kind = "file"
//! path = "presets.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::presets::DEFAULT_STORAGE_KEY;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, NullStore};

/// Top-level customizer configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomizerConfig {
    /// Key the preset list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Where presets are persisted
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            store: StoreConfig::default(),
        }
    }
}

/// Storage backend selection
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    /// No durable storage; presets live for the session only
    #[default]
    None,
    Memory,
    File { path: PathBuf },
}

impl StoreConfig {
    /// Build the configured backend
    pub fn open(&self) -> Box<dyn KeyValueStore> {
        match self {
            Self::None => Box::new(NullStore),
            Self::Memory => Box::new(MemoryStore::new()),
            Self::File { path } => Box::new(FileStore::new(path)),
        }
    }
}

impl CustomizerConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        let config: Self = toml::from_str(src).map_err(|e| ThemeError::Config(e.to_string()))?;
        if config.storage_key.trim().is_empty() {
            return Err(ThemeError::Config("storage_key must not be empty".into()));
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)
            .map_err(|e| ThemeError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml_str(&src)
    }
}
