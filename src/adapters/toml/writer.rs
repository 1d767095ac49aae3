//! TOML writer for guest files

use crate::core::models::GuestDirectory;

use super::parser::{GuestFile, GuestRecord};

/// Format a directory as guest file content
pub fn format_guest_file(directory: &GuestDirectory) -> anyhow::Result<String> {
    let file = GuestFile {
        guests: directory
            .iter()
            .map(|g| GuestRecord {
                name: g.name.clone(),
                table: g.table.get(),
            })
            .collect(),
    };
    Ok(toml::to_string_pretty(&file)?)
}
