//! In-memory draft storage
//!
//! Used when drafts should not outlive the process.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::core::ports::DraftStore;

/// Draft store that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    drafts: Mutex<BTreeMap<String, String>>,
}

impl MemoryDraftStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with entries
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            drafts: Mutex::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.drafts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.lock().remove(key);
        Ok(())
    }

    fn entries(&self) -> anyhow::Result<Vec<(String, String)>> {
        Ok(self.lock().iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}
