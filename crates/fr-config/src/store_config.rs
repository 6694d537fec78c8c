use crate::{ConfigError, ConfigErrorResult, DEFAULT_TRASH_ACTOR};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Actor marker stamped on soft-deleted registrations.
    pub trash_actor: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            trash_actor: String::from(DEFAULT_TRASH_ACTOR),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.trash_actor.is_empty() {
            return Err(ConfigError::store("store.trash_actor must not be empty"));
        }

        Ok(())
    }
}
