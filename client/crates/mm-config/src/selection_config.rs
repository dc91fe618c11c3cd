use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SELECTION_CAPACITY, MAX_SELECTION_CAPACITY,
    MIN_SELECTION_CAPACITY,
};

use serde::Deserialize;

/// How many candidates a user may pick before submitting likes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub capacity: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_SELECTION_CAPACITY,
        }
    }
}

impl SelectionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.capacity < MIN_SELECTION_CAPACITY || self.capacity > MAX_SELECTION_CAPACITY {
            return Err(ConfigError::selection(format!(
                "selection.capacity must be {}-{}, got {}",
                MIN_SELECTION_CAPACITY, MAX_SELECTION_CAPACITY, self.capacity
            )));
        }

        Ok(())
    }
}
