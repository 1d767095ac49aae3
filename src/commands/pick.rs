//! Pick command - choose a table

use std::time::Instant;

use seatfinder::config::Config;
use seatfinder::core::models::TableNumber;
use seatfinder::output::{OperationResult, OutputMode};

/// Select `table` for the given name, or for the saved name draft
pub fn pick(table: &str, name: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let table: TableNumber = table.parse().map_err(anyhow::Error::msg)?;
    let config = Config::load()?;
    let mut page = super::load_page(&config, config.draft_store())?;
    let now = Instant::now();

    if let Some(name) = name {
        page.name_input(name, now)?;
    }

    page.select_table(table, now)?;

    let message = page.view(now).confirmation.map(|shown| shown.message).unwrap_or_default();
    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
