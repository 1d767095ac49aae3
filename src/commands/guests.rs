//! Guest and table listings

use seatfinder::adapters::toml::format_guest_file;
use seatfinder::config::Config;
use seatfinder::output::{GuestListResult, OutputMode, TableInfo, TableListResult};

/// List guests in directory order
pub fn guests(export: bool, mode: OutputMode) -> anyhow::Result<()> {
    let directory = Config::load()?.directory()?;

    if export {
        print!("{}", format_guest_file(&directory)?);
        return Ok(());
    }

    GuestListResult {
        guests: directory.iter().cloned().collect(),
    }
    .render(mode);
    Ok(())
}

/// List tables with their guests
pub fn tables(mode: OutputMode) -> anyhow::Result<()> {
    let directory = Config::load()?.directory()?;

    let tables = directory
        .tables()
        .into_iter()
        .map(|table| TableInfo {
            table,
            guests: directory.guests_at(table).into_iter().map(String::from).collect(),
        })
        .collect();

    TableListResult { tables }.render(mode);
    Ok(())
}
