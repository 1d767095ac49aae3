//! Centralized path definitions for seatfinder
//!
//! All paths are relative to the working directory, where the venue's
//! configuration lives:
//!
//! ```text
//! venue/
//! ├── .seatfinder.toml          # Configuration (optional)
//! ├── guests.toml               # Guest list override (optional)
//! └── .seatfinder/
//!     └── drafts.json           # Cached form drafts
//! ```

use std::path::PathBuf;

/// Configuration filename
pub const CONFIG_FILE: &str = ".seatfinder.toml";

/// Directory name for local state
pub const STATE_DIR: &str = ".seatfinder";

/// Drafts filename
const DRAFTS_FILE: &str = "drafts.json";

/// Get path to `.seatfinder.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Get path to `.seatfinder/`.
#[must_use]
pub fn state_dir() -> PathBuf {
    PathBuf::from(STATE_DIR)
}

/// Get path to `.seatfinder/drafts.json`.
///
/// Default location of cached form drafts.
#[must_use]
pub fn drafts_file() -> PathBuf {
    state_dir().join(DRAFTS_FILE)
}
