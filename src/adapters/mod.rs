//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - JSON file draft storage
//! - `memory/` - In-process draft storage
//! - `toml/` - Guest file parsing and export

pub mod file;
pub mod memory;
pub mod toml;
