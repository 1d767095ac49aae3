//! Initialize seatfinder in the current directory

use std::fs;

use anyhow::Context;
use log::info;
use seatfinder::config::Config;
use seatfinder::output::{OperationResult, OutputMode};
use seatfinder::paths;

/// Write a default `.seatfinder.toml`
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = paths::config_file();

    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to reinitialize.",
                paths::CONFIG_FILE
            ),
        }
        .render(mode);
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    info!("wrote {}", config_path.display());

    // Drafts are local to this machine
    let state_dir = paths::state_dir();
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;
    let ignore = state_dir.join(".gitignore");
    fs::write(&ignore, "*\n").with_context(|| format!("failed to write {}", ignore.display()))?;

    OperationResult {
        success: true,
        message: format!("Created {} and {}/", paths::CONFIG_FILE, paths::STATE_DIR),
    }
    .render(mode);
    Ok(())
}
