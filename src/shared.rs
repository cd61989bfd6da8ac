//! Grouper shared between the history scan and UI queries.
//!
//! Learning takes the write lock for the whole call, so a reader sees a
//! line either fully inserted or not at all. Queries share the read lock.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stt_core::settings::{Settings, SettingsError};
use stt_core::{CommonPrefixGrouper, Group};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Default)]
pub struct SharedGrouper {
    inner: Arc<RwLock<CommonPrefixGrouper>>,
}

impl SharedGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded with the baseline comments from `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::from(CommonPrefixGrouper::from_settings(settings))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CommonPrefixGrouper>, EngineError> {
        self.inner
            .read()
            .map_err(|e| EngineError::Internal(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CommonPrefixGrouper>, EngineError> {
        self.inner
            .write()
            .map_err(|e| EngineError::Internal(e.to_string()))
    }

    pub fn learn_line(&self, comment: &str) -> Result<(), EngineError> {
        self.write()?.learn_line(comment);
        Ok(())
    }

    /// Bulk-learn under a single write lock.
    pub fn learn_all<I>(&self, comments: I) -> Result<usize, EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(self.write()?.learn_all(comments))
    }

    pub fn groups_of(&self, text: &str) -> Result<Vec<Group>, EngineError> {
        Ok(self.read()?.groups_of(text))
    }

    pub fn get_groups_of(&self, text: &str) -> Result<Vec<String>, EngineError> {
        Ok(self.read()?.get_groups_of(text))
    }

    pub fn get_possible_expansions(&self, partial: &str) -> Result<Vec<String>, EngineError> {
        Ok(self.read()?.get_possible_expansions(partial))
    }
}

impl From<CommonPrefixGrouper> for SharedGrouper {
    fn from(grouper: CommonPrefixGrouper) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grouper)),
        }
    }
}
