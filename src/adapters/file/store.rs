//! JSON file draft store
//!
//! All drafts live in one JSON object (`{"guestForm_guestName": "..."}`).
//! Every call reads or rewrites the file, so separate processes see each
//! other's edits like tabs sharing local storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::warn;

use crate::core::ports::DraftStore;

/// Draft store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    /// Store at `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the JSON file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all drafts. A missing file is empty; an unreadable one is
    /// reported and treated as empty.
    fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read drafts {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!("ignoring corrupt draft file {}: {e}", self.path.display());
                Ok(BTreeMap::new())
            },
        }
    }

    fn write_all(&self, drafts: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if drafts.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)
                    .with_context(|| format!("failed to remove drafts {}", self.path.display()))?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(drafts)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write drafts {}", self.path.display()))?;
        Ok(())
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut drafts = self.read_all()?;
        drafts.insert(key.to_string(), value.to_string());
        self.write_all(&drafts)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut drafts = self.read_all()?;
        if drafts.remove(key).is_some() {
            self.write_all(&drafts)?;
        }
        Ok(())
    }

    fn entries(&self) -> anyhow::Result<Vec<(String, String)>> {
        Ok(self.read_all()?.into_iter().collect())
    }
}
