//! TOML parser for guest files

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::GuestDirectory;

/// A guest file structure
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GuestFile {
    /// Guests in seating-list order
    #[serde(default, rename = "guest")]
    pub guests: Vec<GuestRecord>,
}

/// A guest entry in a guest file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestRecord {
    /// Full name
    pub name: String,
    /// Table number (1 or more)
    pub table: u32,
}

/// Parse and validate guest file content
pub fn parse_guest_file(content: &str) -> anyhow::Result<GuestDirectory> {
    let file: GuestFile = toml::from_str(content)?;
    let directory =
        GuestDirectory::from_entries(file.guests.into_iter().map(|g| (g.name, g.table)))?;
    Ok(directory)
}

/// Load a guest file from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_guest_file(path: &Path) -> anyhow::Result<GuestDirectory> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read guest file {}", path.display()))?;
    parse_guest_file(&content).with_context(|| format!("invalid guest file {}", path.display()))
}
