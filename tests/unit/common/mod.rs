//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing seatfinder components.

use std::fs;
use std::path::Path;
use std::time::Duration;

use seatfinder::adapters::file::FileDraftStore;
use seatfinder::core::models::{GuestDirectory, TableNumber, Timing};
use seatfinder::core::services::{GuestResolver, TriggerPolicy, VenuePage};
use tempfile::TempDir;

/// A scratch venue directory with its own config and draft file
pub struct TestVenue {
    dir: TempDir,
}

impl TestVenue {
    /// Empty venue directory (no config: all defaults)
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Venue whose simulated delays are all zero
    pub fn instant() -> Self {
        let venue = Self::new();
        venue.write_config("[timing]\nsubmit_delay_ms = 0\nmenu_close_after_success_ms = 0\n");
        venue
    }

    /// Root path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `.seatfinder.toml`
    pub fn write_config(&self, content: &str) {
        fs::write(self.dir.path().join(".seatfinder.toml"), content).unwrap();
    }

    /// Write a file relative to the venue root
    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).unwrap();
    }

    /// Draft store on this venue's default draft file
    pub fn drafts(&self) -> FileDraftStore {
        FileDraftStore::new(self.dir.path().join(".seatfinder/drafts.json"))
    }

    /// Page over the built-in directory using this venue's draft file
    pub fn page(&self) -> VenuePage {
        VenuePage::new(
            GuestDirectory::builtin(),
            TriggerPolicy::default(),
            Timing::default(),
            Box::new(self.drafts()),
        )
        .unwrap()
    }
}

/// Resolver over the built-in directory
pub fn builtin_resolver() -> GuestResolver {
    GuestResolver::new(GuestDirectory::builtin())
}

/// Shorthand for a valid table number
pub fn table(n: u32) -> TableNumber {
    TableNumber::new(n).unwrap()
}

/// Shorthand for milliseconds
pub const fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
