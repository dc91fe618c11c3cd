use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR};

use std::path::{Component, Path};

use serde::Deserialize;

/// Location of the durable session store, relative to the config directory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::storage("storage.dir cannot be empty"));
        }

        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        if Path::new(&self.dir)
            .components()
            .all(|component| component == Component::CurDir)
        {
            return Err(ConfigError::storage(
                "storage.dir must name a subdirectory of the config directory",
            ));
        }

        Ok(())
    }
}
