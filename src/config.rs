//! Venue configuration
//!
//! Loaded from `.seatfinder.toml` in the working directory. Every field has
//! a default, so a missing file or a partial file is fine.
//!
//! ```toml
//! [trigger]
//! live_min_chars = 3
//! blur_min_chars = 2
//!
//! [timing]
//! guest_found_ms = 5000
//! submit_delay_ms = 1500
//!
//! [storage]
//! drafts = ".seatfinder/drafts.json"
//! persist_drafts = true
//! guests = "guests.toml"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::adapters::file::FileDraftStore;
use crate::adapters::memory::MemoryDraftStore;
use crate::adapters::toml::load_guest_file;
use crate::core::models::{GuestDirectory, Timing};
use crate::core::ports::DraftStore;
use crate::core::services::TriggerPolicy;
use crate::paths;

/// seatfinder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Lookup trigger thresholds
    #[serde(default)]
    pub trigger: TriggerConfig,
    /// Notice lifetimes and simulated delays
    #[serde(default)]
    pub timing: TimingConfig,
    /// Where state lives
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Lookup trigger thresholds (trimmed characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Minimum length while typing
    pub live_min_chars: usize,
    /// Minimum length on focus loss
    pub blur_min_chars: usize,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        let policy = TriggerPolicy::default();
        Self {
            live_min_chars: policy.live_min_chars,
            blur_min_chars: policy.blur_min_chars,
        }
    }
}

/// Delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Guest-found notice lifetime
    pub guest_found_ms: u64,
    /// Suggestions notice lifetime
    pub suggestions_ms: u64,
    /// Table-assignment notice lifetime
    pub table_assignment_ms: u64,
    /// Feedback thank-you lifetime
    pub feedback_thanks_ms: u64,
    /// Delay before scrolling to a highlighted table
    pub scroll_delay_ms: u64,
    /// Simulated submission latency
    pub submit_delay_ms: u64,
    /// Delay before menus close after a submission
    pub menu_close_after_success_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::from(Timing::default())
    }
}

#[allow(clippy::cast_possible_truncation)] // delays are seconds, not centuries
const fn millis(d: Duration) -> u64 {
    d.as_millis() as u64
}

impl From<Timing> for TimingConfig {
    fn from(t: Timing) -> Self {
        Self {
            guest_found_ms: millis(t.guest_found),
            suggestions_ms: millis(t.suggestions),
            table_assignment_ms: millis(t.table_assignment),
            feedback_thanks_ms: millis(t.feedback_thanks),
            scroll_delay_ms: millis(t.scroll_delay),
            submit_delay_ms: millis(t.submit_delay),
            menu_close_after_success_ms: millis(t.menu_close_after_success),
        }
    }
}

impl From<TimingConfig> for Timing {
    fn from(c: TimingConfig) -> Self {
        Self {
            guest_found: Duration::from_millis(c.guest_found_ms),
            suggestions: Duration::from_millis(c.suggestions_ms),
            table_assignment: Duration::from_millis(c.table_assignment_ms),
            feedback_thanks: Duration::from_millis(c.feedback_thanks_ms),
            scroll_delay: Duration::from_millis(c.scroll_delay_ms),
            submit_delay: Duration::from_millis(c.submit_delay_ms),
            menu_close_after_success: Duration::from_millis(c.menu_close_after_success_ms),
        }
    }
}

/// Storage locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Draft file location
    pub drafts: PathBuf,
    /// Keep drafts between runs (false = in-memory only)
    pub persist_drafts: bool,
    /// Guest file replacing the built-in directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            drafts: paths::drafts_file(),
            persist_drafts: true,
            guests: None,
        }
    }
}

impl Config {
    /// Load `.seatfinder.toml` from the working directory
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&paths::config_file())
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Write to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Trigger thresholds
    #[must_use]
    pub const fn trigger_policy(&self) -> TriggerPolicy {
        TriggerPolicy {
            live_min_chars: self.trigger.live_min_chars,
            blur_min_chars: self.trigger.blur_min_chars,
        }
    }

    /// Delays
    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing.into()
    }

    /// Guest directory: the guest file if configured, else the built-in one
    pub fn directory(&self) -> anyhow::Result<GuestDirectory> {
        match &self.storage.guests {
            Some(path) => load_guest_file(path),
            None => Ok(GuestDirectory::builtin()),
        }
    }

    /// Draft store selected by the storage settings
    #[must_use]
    pub fn draft_store(&self) -> Box<dyn DraftStore> {
        if self.storage.persist_drafts {
            Box::new(FileDraftStore::new(&self.storage.drafts))
        } else {
            Box::new(MemoryDraftStore::new())
        }
    }
}
